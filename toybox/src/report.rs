//! Runs the fixed sequence of toy operations and renders the result.

use anyhow::{Context, Result};
use rand::Rng;
use serde::Serialize;
use tracing::{debug, info};

use crate::core::arith::{double_all, total};
use crate::core::calc::complex_calc;
use crate::core::random::draw;
use crate::core::reverse::reverse_str;
use crate::io::config::ToyConfig;
use crate::io::probe::{FileProbe, probe_file};

/// Values computed by one pass over the sequence.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Report {
    pub total: i64,
    pub doubled: Vec<i64>,
    pub reversed: String,
    pub complex_calc: i64,
    pub file: FileProbe,
    pub random: Vec<u32>,
}

/// Execute every operation in order.
///
/// Fails on an invalid config or arithmetic overflow. The file probe never
/// fails.
pub fn run<R: Rng + ?Sized>(cfg: &ToyConfig, rng: &mut R) -> Result<Report> {
    cfg.validate().context("validate config")?;
    info!("running toy sequence");
    let total = total_line(cfg)?;
    let doubled = double_all(&cfg.values).context("double values: result overflows i64")?;
    let reversed = reverse_str(&cfg.text);
    let complex_calc = complex_calc(cfg.calc_n)
        .with_context(|| format!("complex calc of n={}: input out of range", cfg.calc_n))?;
    debug!(total, complex_calc, "arithmetic done");
    let file = probe_file(&cfg.probe_path);
    let random = draw(rng, cfg.random.count, cfg.random.upper);
    info!(random_count = random.len(), "toy sequence finished");
    Ok(Report {
        total,
        doubled,
        reversed,
        complex_calc,
        file,
        random,
    })
}

/// Compute the `Total:` value from the arithmetic section of `cfg`.
pub fn total_line(cfg: &ToyConfig) -> Result<i64> {
    let arith = &cfg.arith;
    total(arith.x, arith.y, arith.global).with_context(|| {
        format!(
            "total of x={} y={} global={}: result overflows i64",
            arith.x, arith.y, arith.global
        )
    })
}

/// One line per value, in console order.
pub fn render_text(report: &Report) -> String {
    let mut lines = vec![
        format!("Total: {}", report.total),
        format!("Doubled: {:?}", report.doubled),
        format!("Reversed: {}", report.reversed),
        format!("ComplexCalc: {}", report.complex_calc),
        format!("File pointer: {}", report.file),
    ];
    lines.extend(
        report
            .random
            .iter()
            .map(|value| format!("Random number: {}", value)),
    );
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Pretty-printed JSON with trailing newline.
pub fn render_json(report: &Report) -> Result<String> {
    let mut payload = serde_json::to_string_pretty(report).context("serialize report json")?;
    payload.push('\n');
    Ok(payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::random::rng_from_seed;
    use crate::test_support::config_with_probe;

    #[test]
    fn default_sequence_matches_known_values() {
        let temp = tempfile::tempdir().expect("tempdir");
        let cfg = config_with_probe(temp.path(), "nofile.txt", Some(3));

        let report = run(&cfg, &mut rng_from_seed(Some(3))).expect("run");
        assert_eq!(report.total, 107);
        assert_eq!(report.doubled, vec![2, 4, 6, 8, 10]);
        assert_eq!(report.reversed, "dlrowolleh");
        assert_eq!(report.complex_calc, 108);
        assert_eq!(report.file, FileProbe::Unavailable);
        assert_eq!(report.random.len(), 4);
        assert!(report.random.iter().all(|value| *value < 100));
    }

    #[test]
    fn overflow_is_an_error() {
        let mut cfg = ToyConfig::default();
        cfg.arith.x = i64::MAX;
        let err = run(&cfg, &mut rng_from_seed(Some(1))).expect_err("overflow");
        assert!(format!("{:#}", err).contains("overflows"));
    }

    #[test]
    fn invalid_config_is_rejected_before_drawing() {
        let mut cfg = ToyConfig::default();
        cfg.random.upper = 0;
        let err = run(&cfg, &mut rng_from_seed(Some(1))).expect_err("zero upper");
        assert!(format!("{:#}", err).contains("random.upper"));
    }

    #[test]
    fn calc_input_above_cap_is_rejected() {
        let mut cfg = ToyConfig::default();
        cfg.calc_n = u32::MAX;
        assert!(run(&cfg, &mut rng_from_seed(Some(1))).is_err());
    }

    #[test]
    fn render_text_lists_values_in_order() {
        let report = Report {
            total: 107,
            doubled: vec![2, 4],
            reversed: "dlrowolleh".to_string(),
            complex_calc: 108,
            file: FileProbe::Unavailable,
            random: vec![3, 99],
        };
        let expected = "Total: 107\n\
                        Doubled: [2, 4]\n\
                        Reversed: dlrowolleh\n\
                        ComplexCalc: 108\n\
                        File pointer: <nil>\n\
                        Random number: 3\n\
                        Random number: 99\n";
        assert_eq!(render_text(&report), expected);
    }

    #[test]
    fn render_json_includes_probe_status() {
        let report = Report {
            total: 1,
            doubled: Vec::new(),
            reversed: String::new(),
            complex_calc: 0,
            file: FileProbe::Unavailable,
            random: Vec::new(),
        };
        let json = render_json(&report).expect("json");
        let value: serde_json::Value = serde_json::from_str(&json).expect("parse");
        assert_eq!(value["total"], 1);
        assert_eq!(value["file"]["status"], "unavailable");
        assert!(json.ends_with('\n'));
    }
}
