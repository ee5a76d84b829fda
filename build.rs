use csv::StringRecord;
use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::PathBuf,
};

// Rule sets are evaluated on demand, so the range only bounds what callers
// may request.
const DEFAULT_MIN_YEAR: isize = 1950;
const DEFAULT_MAX_YEAR: isize = 2100;

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Kind {
    Country,
    Market,
}

impl Kind {
    fn type_name(&self) -> &'static str {
        match self {
            Kind::Country => "Country",
            Kind::Market => "Market",
        }
    }
}

#[derive(PartialEq, Eq, PartialOrd, Ord)]
struct Code {
    kind: Kind,
    index: u16,
    code: String,
    name: String,
    aliases: Vec<String>,
    subdivisions: Vec<String>,
}

pub fn is_code_enabled(code: &str) -> bool {
    let feature = format!("CARGO_FEATURE_{code}");
    std::env::var(&feature).is_ok()
}

fn split_list(field: Option<&str>) -> Vec<String> {
    field
        .unwrap_or_default()
        .split_whitespace()
        .map(String::from)
        .collect()
}

fn parse_code_row(row: StringRecord) -> Code {
    let code = row.get(0).expect("invalid row in calendars.csv").to_string();
    let name = row.get(1).expect("invalid row in calendars.csv").to_string();
    let kind = match row.get(2).expect("invalid row in calendars.csv") {
        "country" => Kind::Country,
        "market" => Kind::Market,
        other => panic!("unknown kind `{other}` for {code} in calendars.csv"),
    };

    Code {
        kind,
        index: 0,
        code,
        name,
        aliases: split_list(row.get(3)),
        subdivisions: split_list(row.get(4)),
    }
}

fn quoted(items: &[String]) -> String {
    items
        .iter()
        .map(|it| format!("\"{it}\""))
        .collect::<Vec<_>>()
        .join(", ")
}

fn gen_code_enum_decl<'a, W: Write, C: Iterator<Item = &'a Code>>(
    out: &mut W,
    kind: Kind,
    codes: C,
) -> std::io::Result<()> {
    let ty = kind.type_name();
    let mut lookup = phf_codegen::Map::<&str>::new();
    let mut subdivision_lookup = phf_codegen::Map::<String>::new();

    writeln!(out, "declare_codes![{ty};")?;
    for c in codes {
        writeln!(
            out,
            "{0}: \"{0}\" \"{1}\" {2} [{3}] [{4}],",
            c.code,
            c.name,
            c.index,
            quoted(&c.aliases),
            quoted(&c.subdivisions)
        )?;
        lookup.entry(&c.code, format!("{ty}::{}", c.code));
        for alias in &c.aliases {
            lookup.entry(alias, format!("{ty}::{}", c.code));
        }
        for subdivision in &c.subdivisions {
            subdivision_lookup.entry(
                format!("{}-{subdivision}", c.code),
                format!("{ty}::{}", c.code),
            );
        }
    }
    out.write_all(b"];\n")?;

    let upper = ty.to_uppercase();
    writeln!(
        out,
        "pub(crate) static {upper}_LOOKUP: phf::Map<&'static str, {ty}> = {};",
        lookup.build()
    )?;
    if kind == Kind::Country {
        writeln!(
            out,
            "pub(crate) static SUBDIVISION_LOOKUP: phf::Map<&'static str, {ty}> = {};",
            subdivision_lookup.build()
        )?;
    }

    Ok(())
}

fn year_from_env(var: &str, default: isize) -> isize {
    println!("cargo:rerun-if-env-changed={var}");
    std::env::var(var)
        .map(|it| it.parse().unwrap_or(default))
        .unwrap_or(default)
}

fn main() {
    let root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").unwrap());
    let calendars_path = root.join("calendars.csv");
    println!("cargo:rerun-if-changed={}", calendars_path.display());

    let mut codes: Vec<Code> = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(BufReader::new(match File::open(&calendars_path) {
            Ok(it) => it,
            Err(_) => {
                panic!("missing {}", calendars_path.display())
            }
        }))
        .records()
        .filter_map(Result::ok)
        .map(parse_code_row)
        .filter(|it| is_code_enabled(&it.code))
        .collect();
    codes.sort_by(|a, b| a.kind.cmp(&b.kind).then(a.code.cmp(&b.code)));

    let out_dir = PathBuf::from(&std::env::var("OUT_DIR").unwrap());
    let codes_out = out_dir.join("decl_codes.rs");
    let mut codes_out =
        BufWriter::new(File::create(codes_out).expect("unable to create decl_codes.rs"));

    for kind in [Kind::Country, Kind::Market] {
        codes
            .iter_mut()
            .filter(|it| it.kind == kind)
            .enumerate()
            .for_each(|(i, it)| {
                it.index = i as u16;
            });
        gen_code_enum_decl(
            &mut codes_out,
            kind,
            codes.iter().filter(|it| it.kind == kind),
        )
        .unwrap();
    }

    let min_year = year_from_env("HOLIDAYS_MIN_YEAR", DEFAULT_MIN_YEAR);
    let max_year = year_from_env("HOLIDAYS_MAX_YEAR", DEFAULT_MAX_YEAR);
    assert!(min_year <= max_year, "HOLIDAYS_MIN_YEAR exceeds HOLIDAYS_MAX_YEAR");

    let range_out = out_dir.join("year_range.rs");
    let mut range_out =
        BufWriter::new(File::create(range_out).expect("unable to create year_range.rs"));
    writeln!(range_out, "pub(crate) const DATA_MIN_YEAR: isize = {min_year};").unwrap();
    writeln!(range_out, "pub(crate) const DATA_MAX_YEAR: isize = {max_year};").unwrap();
}
