use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use super::model::{SampleSet, SeriesSpec};

// ---------------------------------------------------------------------------
// On-disk records
// ---------------------------------------------------------------------------

/// One component as written in a series file. Not validated yet: values
/// go through the component store before they are used.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComponentRecord {
    pub amplitude: f64,
    pub frequency: f64,
}

impl From<ComponentRecord> for (f64, f64) {
    fn from(rec: ComponentRecord) -> Self {
        (rec.amplitude, rec.frequency)
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct SeriesFile {
    components: Vec<ComponentRecord>,
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Read a series file.  Dispatch by extension.
///
/// Supported formats:
/// * `.json` – `{ "components": [{ "amplitude": 0.5, "frequency": 2.0 }, ...] }`
/// * `.csv`  – header `amplitude,frequency`, one component per row
pub fn load_file(path: &Path) -> Result<Vec<ComponentRecord>> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    match extension(path).as_str() {
        "json" => read_json(file),
        "csv" => read_csv(file),
        other => bail!("Unsupported file extension: .{other}"),
    }
}

/// Write `spec` to a series file in the format implied by the extension.
pub fn save_file(path: &Path, spec: &SeriesSpec) -> Result<()> {
    let ext = extension(path);
    if ext != "json" && ext != "csv" {
        bail!("Unsupported file extension: .{ext}");
    }
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    if ext == "json" {
        write_json(file, spec)
    } else {
        write_csv(file, spec)
    }
}

fn extension(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase()
}

// ---------------------------------------------------------------------------
// JSON
// ---------------------------------------------------------------------------

pub fn read_json<R: Read>(reader: R) -> Result<Vec<ComponentRecord>> {
    let file: SeriesFile = serde_json::from_reader(reader).context("parsing series JSON")?;
    Ok(file.components)
}

pub fn write_json<W: Write>(writer: W, spec: &SeriesSpec) -> Result<()> {
    serde_json::to_writer_pretty(writer, spec).context("writing series JSON")
}

// ---------------------------------------------------------------------------
// CSV
// ---------------------------------------------------------------------------

pub fn read_csv<R: Read>(reader: R) -> Result<Vec<ComponentRecord>> {
    let mut reader = csv::Reader::from_reader(reader);
    reader
        .deserialize()
        .enumerate()
        .map(|(row_no, rec)| rec.with_context(|| format!("CSV row {row_no}")))
        .collect()
}

pub fn write_csv<W: Write>(writer: W, spec: &SeriesSpec) -> Result<()> {
    let mut writer = csv::Writer::from_writer(writer);
    for component in spec {
        writer
            .serialize(component)
            .context("writing CSV component row")?;
    }
    writer.flush().context("flushing CSV")?;
    Ok(())
}

/// Write evaluated samples as `t,value` rows.
pub fn export_samples_csv<W: Write>(writer: W, samples: &SampleSet) -> Result<()> {
    let mut writer = csv::Writer::from_writer(writer);
    for sample in samples.iter() {
        writer.serialize(sample).context("writing CSV sample row")?;
    }
    writer.flush().context("flushing CSV")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::model::SineComponent;

    #[test]
    fn reads_json_components_in_order() {
        let text = r#"{"components": [
            {"amplitude": 0.5, "frequency": 2.0},
            {"amplitude": -0.3, "frequency": 5.0}
        ]}"#;
        let recs = read_json(text.as_bytes()).unwrap();
        assert_eq!(
            recs,
            vec![
                ComponentRecord { amplitude: 0.5, frequency: 2.0 },
                ComponentRecord { amplitude: -0.3, frequency: 5.0 },
            ]
        );
    }

    #[test]
    fn reads_csv_components() {
        let text = "amplitude,frequency\n0.5,2\n0.2,8.5\n";
        let recs = read_csv(text.as_bytes()).unwrap();
        assert_eq!(recs.len(), 2);
        assert_eq!(recs[1].frequency, 8.5);
    }

    #[test]
    fn csv_with_bad_number_names_the_row() {
        let text = "amplitude,frequency\n0.5,2\nabc,1\n";
        let err = read_csv(text.as_bytes()).unwrap_err();
        assert!(format!("{err:#}").contains("CSV row 1"));
    }

    #[test]
    fn json_without_components_fails() {
        assert!(read_json(r#"{"terms": []}"#.as_bytes()).is_err());
    }

    #[test]
    fn written_csv_has_header() {
        let spec = SeriesSpec::from_components(vec![SineComponent::new(1.0, 3.0).unwrap()]);
        let mut out = Vec::new();
        write_csv(&mut out, &spec).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("amplitude,frequency\n"));
    }
}
