use crate::Error;

macro_rules! declare_codes {
    ($ty: ident; $($code: ident: $str_code: literal $name: literal $val: literal [$($alias: literal),*] [$($subdiv: literal),*]),* $(,)?) => {
        #[allow(dead_code)]
        #[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, PartialOrd, Ord)]
        pub enum $ty {$(
            #[doc = $name]
            $code = $val
        ),*}

        impl $ty {
            /// Every code compiled into this build, sorted by code.
            pub const ALL: &'static [$ty] = &[$($ty::$code),*];

            const CODES: &'static [&'static str] = &[$(
                $str_code
            ),*];
            const NAMES: &'static [&'static str] = &[$(
                $name
            ),*];
            const ALIASES: &'static [&'static [&'static str]] = &[$(
                &[$($alias),*]
            ),*];
            #[allow(dead_code)]
            const SUBDIVISIONS: &'static [&'static [&'static str]] = &[$(
                &[$($subdiv),*]
            ),*];

            #[inline]
            const fn index(&self) -> usize {
                match *self {$(
                    $ty::$code => $val
                ),*}
            }

            /// Canonical code, e.g. `US`.
            #[inline]
            pub fn code(&self) -> &'static str {
                Self::CODES[self.index()]
            }

            /// Long name
            #[inline]
            pub fn name(&self) -> &'static str {
                Self::NAMES[self.index()]
            }

            /// Alternate identifiers resolving to the same rule set.
            #[inline]
            pub fn aliases(&self) -> &'static [&'static str] {
                Self::ALIASES[self.index()]
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.code())
            }
        }

        impl AsRef<str> for $ty {
            fn as_ref(&self) -> &str {
                self.code()
            }
        }
    };
}

include!(concat!(env!("OUT_DIR"), "/decl_codes.rs"));

impl Country {
    /// Codes of the regions (states, provinces, nations) with their own
    /// supplementary holidays.
    #[inline]
    pub fn subdivisions(&self) -> &'static [&'static str] {
        Self::SUBDIVISIONS[self.index()]
    }

    pub fn has_subdivision(&self, subdivision: &str) -> bool {
        SUBDIVISION_LOOKUP
            .get(format!("{}-{subdivision}", self.code()).as_str())
            .is_some_and(|it| it == self)
    }
}

/// Resolves canonical codes and aliases, e.g. both `GB` and `UK`.
impl std::str::FromStr for Country {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        COUNTRY_LOOKUP
            .get(s)
            .copied()
            .ok_or_else(|| Error::CountryNotAvailable(s.to_string()))
    }
}

impl std::str::FromStr for Market {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        MARKET_LOOKUP
            .get(s)
            .copied()
            .ok_or_else(|| Error::MarketNotAvailable(s.to_string()))
    }
}

/// Lists codes in declaration order, optionally followed by each code's
/// aliases.
pub(crate) fn list_codes<T>(
    all: &[T],
    include_aliases: bool,
    aliases: fn(&T) -> &'static [&'static str],
) -> Vec<String>
where
    T: AsRef<str>,
{
    let mut codes: Vec<String> = all.iter().map(|it| it.as_ref().to_string()).collect();
    if include_aliases {
        codes.extend(all.iter().flat_map(aliases).map(|it| it.to_string()));
    }
    codes
}
