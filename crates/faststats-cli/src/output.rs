use clap::ValueEnum;
use faststats::Summary;
use serde::Serialize;
use std::error::Error;
use std::fmt::Debug;
use std::io::Write;

#[derive(Debug, Copy, Clone, Default, PartialEq, ValueEnum)]
pub(crate) enum Output {
    /// Default classic output for human reading. One labeled line per statistic.
    #[default]
    Default,
    /// Json object output. Contains the input values and every statistic.
    Json,
    /// CSV output. A header row and a single row of statistics.
    CSV,
}

#[derive(Serialize)]
struct Report<'a> {
    values: &'a [f64],
    #[serde(flatten)]
    summary: Summary,
}

impl Output {
    /// Json and CSV need every statistic and fail on an empty sample. The default output prints
    /// the error in place of the statistics that can't be computed.
    pub(crate) fn write_results(
        &self,
        mut w: impl Write,
        values: &[f64],
    ) -> Result<(), Box<dyn Error>> {
        match self {
            Output::Default => {
                writeln!(w, "Data: {values:?}")?;
                writeln!(w, "Sum: {:?}", faststats::sum(values))?;
                write_fallible(&mut w, "Mean", faststats::mean(values))?;
                write_fallible(&mut w, "Standard Deviation", faststats::std_dev(values))?;
                write_fallible(&mut w, "Mode", faststats::mode(values))?;
                writeln!(w, "Count: {}", faststats::count(values))?;
            }
            Output::Json => {
                let report = Report {
                    values,
                    summary: Summary::compute(values)?,
                };
                serde_json::to_writer_pretty(&mut w, &report)?;
                writeln!(w)?;
            }
            Output::CSV => {
                let summary = Summary::compute(values)?;
                let mut csv = csv::Writer::from_writer(w);
                csv.serialize(&summary)?;
                csv.flush()?;
            }
        }
        Ok(())
    }
}

fn write_fallible<T: Debug, E: Error>(
    w: &mut impl Write,
    label: &str,
    value: Result<T, E>,
) -> std::io::Result<()> {
    match value {
        Ok(value) => writeln!(w, "{label}: {value:?}"),
        Err(e) => writeln!(w, "{label}: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DEMO_SAMPLE;

    fn render(output: Output, values: &[f64]) -> String {
        let mut buf = Vec::new();
        output.write_results(&mut buf, values).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn default_output() {
        let text = render(Output::Default, &DEMO_SAMPLE);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "Data: [1.0, 2.0, 3.0, 2.0, 4.0, 5.0, 2.0]");
        assert_eq!(lines[1], "Sum: 19.0");
        assert_eq!(lines[2], "Mean: 2.7142857142857144");
        assert!(lines[3].starts_with("Standard Deviation: 1.27775"));
        assert_eq!(lines[4], "Mode: 2.0");
        assert_eq!(lines[5], "Count: 7");
    }

    #[test]
    fn default_output_empty() {
        let text = render(Output::Default, &[]);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "Data: []");
        assert_eq!(lines[1], "Sum: 0.0");
        assert_eq!(lines[2], "Mean: invalid input: the sample is empty");
        assert_eq!(lines[5], "Count: 0");
    }

    #[test]
    fn json_output() {
        let text = render(Output::Json, &DEMO_SAMPLE);
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(json["values"].as_array().unwrap().len(), 7);
        assert_eq!(json["count"], 7);
        assert_eq!(json["sum"], 19.0);
        assert_eq!(json["mode"], 2.0);
        assert_eq!(json["min"], 1.0);
        assert_eq!(json["max"], 5.0);
    }

    #[test]
    fn csv_output() {
        let text = render(Output::CSV, &DEMO_SAMPLE);
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("count,sum,mean,var,sample_var,stddev,sample_stddev,mode,min,max")
        );
        assert!(lines.next().unwrap().starts_with("7,19"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn empty_summary_fails() {
        let mut buf = Vec::new();
        assert!(Output::Json.write_results(&mut buf, &[]).is_err());
        assert!(Output::CSV.write_results(&mut buf, &[]).is_err());
    }
}
