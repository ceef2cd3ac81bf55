//! `recoil.inc` generator
//!
//! Emits the Arduino-flavoured C declarations the mouse firmware includes:
//! a profile count, names and magazine sizes, then three flat sample arrays
//! laid out with a fixed stride of `max_length` samples per profile.

use serde_json::Number;
use std::fmt::{Display, Write as FmtWrite};

use crate::error::Result;
use crate::model::{RecoilProfile, RecoilTable};
use crate::padding;

/// One-line summary printed before the header
pub fn summary_line(table: &RecoilTable) -> String {
    format!(
        "{} recoils, max length {}",
        table.len(),
        table.max_length()
    )
}

/// Generate the header text from a recoil table
pub fn generate_header(table: &RecoilTable) -> Result<String> {
    let mut output = String::new();

    writeln!(output, "const int RECOILS_LENGTH = {};", table.len())?;

    write_array(
        &mut output,
        "const String names[]",
        table
            .profiles()
            .iter()
            .map(|p| format!("\"{}\"", escape_c_string(&p.name))),
    )?;

    write_array(
        &mut output,
        "const int sizes[]",
        table.profiles().iter().map(RecoilProfile::terminal_mag_size),
    )?;

    write_samples(&mut output, "const PROGMEM float XDATA[]", table, |p| p.x.as_slice())?;
    write_samples(&mut output, "const PROGMEM float YDATA[]", table, |p| p.y.as_slice())?;
    write_samples(&mut output, "const PROGMEM float TDATA[]", table, |p| {
        p.time_points.as_slice()
    })?;

    Ok(output)
}

/// Write every profile's padded samples for one axis as a single flat array
fn write_samples<F>(output: &mut String, decl: &str, table: &RecoilTable, axis: F) -> Result<()>
where
    F: Fn(&RecoilProfile) -> &[Number],
{
    let stride = table.max_length();
    let samples = table
        .profiles()
        .iter()
        .flat_map(|p| padding::extend(axis(p), stride, Number::from(0)));

    write_array(output, decl, samples)
}

fn write_array<I>(output: &mut String, decl: &str, items: I) -> Result<()>
where
    I: IntoIterator,
    I::Item: Display,
{
    write!(output, "{} = {{", decl)?;
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            output.push(',');
        }
        write!(output, "{}", item)?;
    }
    writeln!(output, "}};")?;
    Ok(())
}

/// Escape a profile name for use inside a C string literal
fn escape_c_string(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(json: &str) -> RecoilTable {
        RecoilTable::from_json_str(json).unwrap()
    }

    #[test]
    fn test_generate_single_profile() {
        let table = table(
            r#"[{"name":"AK","mags":[{"size":3}],"x":[1,2,3],"y":[0,0,0],"time_points":[0,10,20]}]"#,
        );

        let header = generate_header(&table).unwrap();

        assert_eq!(
            header,
            "const int RECOILS_LENGTH = 1;\n\
             const String names[] = {\"AK\"};\n\
             const int sizes[] = {3};\n\
             const PROGMEM float XDATA[] = {1,2,3};\n\
             const PROGMEM float YDATA[] = {0,0,0};\n\
             const PROGMEM float TDATA[] = {0,10,20};\n"
        );
        assert_eq!(summary_line(&table), "1 recoils, max length 3");
    }

    #[test]
    fn test_shorter_profiles_are_zero_padded() {
        let table = table(
            r#"[
                {"name":"P1","mags":[{"size":2}],"x":[1,2],"y":[3,4],"time_points":[0,50]},
                {"name":"P2","mags":[{"size":4}],"x":[5,6,7,8],"y":[9,10,11,12],"time_points":[0,1,2,3]}
            ]"#,
        );

        let header = generate_header(&table).unwrap();

        assert_eq!(summary_line(&table), "2 recoils, max length 4");
        assert!(header.contains("const String names[] = {\"P1\",\"P2\"};\n"));
        assert!(header.contains("const int sizes[] = {2,4};\n"));
        assert!(header.contains("const PROGMEM float XDATA[] = {1,2,0,0,5,6,7,8};\n"));
        assert!(header.contains("const PROGMEM float YDATA[] = {3,4,0,0,9,10,11,12};\n"));
        assert!(header.contains("const PROGMEM float TDATA[] = {0,50,0,0,0,1,2,3};\n"));
    }

    #[test]
    fn test_declaration_order() {
        let table = table(
            r#"[{"name":"AK","mags":[{"size":1}],"x":[1],"y":[1],"time_points":[1]}]"#,
        );
        let header = generate_header(&table).unwrap();

        let decls: Vec<&str> = header
            .lines()
            .map(|line| line.split(" = ").next().unwrap())
            .collect();
        assert_eq!(
            decls,
            [
                "const int RECOILS_LENGTH",
                "const String names[]",
                "const int sizes[]",
                "const PROGMEM float XDATA[]",
                "const PROGMEM float YDATA[]",
                "const PROGMEM float TDATA[]",
            ]
        );
    }

    #[test]
    fn test_floats_keep_fractional_part() {
        let table = table(
            r#"[{"name":"AK","mags":[{"size":3}],"x":[0,-4.5,1.0],"y":[-33.7,2,0.25],"time_points":[0,64,129]}]"#,
        );
        let header = generate_header(&table).unwrap();

        assert!(header.contains("XDATA[] = {0,-4.5,1.0};"));
        assert!(header.contains("YDATA[] = {-33.7,2,0.25};"));
    }

    #[test]
    fn test_over_length_samples_are_kept() {
        let table = table(
            r#"[{"name":"AK","mags":[{"size":2}],"x":[1,2,3],"y":[4,5],"time_points":[6]}]"#,
        );
        let header = generate_header(&table).unwrap();

        assert!(header.contains("XDATA[] = {1,2,3};"));
        assert!(header.contains("YDATA[] = {4,5};"));
        assert!(header.contains("TDATA[] = {6,0};"));
    }

    #[test]
    fn test_names_are_escaped() {
        assert_eq!(escape_c_string("AK-47"), "AK-47");
        assert_eq!(escape_c_string(r#"The "Boss""#), r#"The \"Boss\""#);
        assert_eq!(escape_c_string("a\\b\nc"), "a\\\\b\\nc");
    }
}
