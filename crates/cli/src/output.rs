use std::io::Write;

use anyhow::Context;
use serde::Serialize;

/// JSON envelope for `--json` output.
#[derive(Serialize)]
pub struct JsonOut<'a, T: Serialize> {
    pub ok: bool,
    pub data: &'a T,
}

/// Plain-text rendering of a command result, one entry per output line.
pub trait Render {
    fn lines(&self) -> Vec<String>;
}

/// Write `report` as text lines, or as a JSON envelope when `json` is set.
pub fn emit<W, T>(out: &mut W, json: bool, report: &T) -> anyhow::Result<()>
where
    W: Write + ?Sized,
    T: Render + Serialize,
{
    if json {
        let body = serde_json::to_string_pretty(&JsonOut {
            ok: true,
            data: report,
        })
        .context("serialize json output")?;
        writeln!(out, "{body}").context("write json output")?;
    } else {
        for line in report.lines() {
            writeln!(out, "{line}").context("write output")?;
        }
    }
    out.flush().context("flush output")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Greeting {
        name: &'static str,
    }

    impl Render for Greeting {
        fn lines(&self) -> Vec<String> {
            vec![format!("hello {}", self.name)]
        }
    }

    #[test]
    fn text_mode_writes_lines() {
        let mut buf = Vec::new();
        emit(&mut buf, false, &Greeting { name: "door" }).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "hello door\n");
    }

    #[test]
    fn json_mode_wraps_in_envelope() {
        let mut buf = Vec::new();
        emit(&mut buf, true, &Greeting { name: "window" }).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["ok"], true);
        assert_eq!(value["data"]["name"], "window");
    }
}
