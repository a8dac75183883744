//! Interactive policy collection.
//!
//! Every question is asked again until the answer parses and is in range, so
//! the simulation core only ever sees a valid [`PolicyInput`].

use std::io::{self, BufRead, Write};

use sc_core::{Corridor, MAX_ITERATIONS, PolicyInput};

/// Ask for the corridor, the path-willingness share and the iteration count.
///
/// Fails only on an I/O error or when `input` ends before all three answers
/// are given.
pub fn prompt_policy<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<PolicyInput> {
    let corridor = ask(
        input,
        output,
        &format!(
            "Bike path: none ({}), to Roberts Creek ({}) or to Sechelt ({})? ",
            Corridor::None.code(),
            Corridor::ToRobertsCreek.code(),
            Corridor::ToSechelt.code(),
        ),
        parse_corridor,
    )?;
    let p_bike_if_path = ask(
        input,
        output,
        "Share of residents who bike if the path covers their trip [0-1]: ",
        parse_probability,
    )?;
    let iterations = ask(
        input,
        output,
        &format!("Iterations [1-{MAX_ITERATIONS}]: "),
        parse_iterations,
    )?;

    Ok(PolicyInput { corridor, p_bike_if_path, iterations, ..PolicyInput::default() })
}

fn ask<R, W, T>(
    input:    &mut R,
    output:   &mut W,
    question: &str,
    parse:    impl Fn(&str) -> Option<T>,
) -> io::Result<T>
where
    R: BufRead,
    W: Write,
{
    let mut line = String::new();
    loop {
        write!(output, "{question}")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed before an answer"));
        }
        match parse(line.trim()) {
            Some(v) => return Ok(v),
            None    => writeln!(output, "Invalid answer: {:?}", line.trim())?,
        }
    }
}

// ── Parsers ───────────────────────────────────────────────────────────────────

/// Single-letter codes only, case-sensitive.
fn parse_corridor(s: &str) -> Option<Corridor> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Corridor::from_code(c),
        _               => None,
    }
}

fn parse_probability(s: &str) -> Option<f64> {
    s.parse::<f64>().ok().filter(|p| (0.0..=1.0).contains(p))
}

fn parse_iterations(s: &str) -> Option<u32> {
    s.parse::<u32>().ok().filter(|n| (1..=MAX_ITERATIONS).contains(n))
}
