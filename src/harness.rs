use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use std::time::Instant;

use serde::Serialize;
use serde_json::Value;

use crate::error::{GError, GResult};

/// A computation that can be driven by [`perform`].
pub trait Setup {
    type Problem;
    type Output;

    fn input(&self, src: &Value) -> GResult<Self::Problem>;

    fn compute(&self, problem: &Self::Problem) -> GResult<Self::Output>;

    fn output(&self, out: &Self::Output) -> Value;
}

#[derive(Debug, Serialize)]
pub struct Report {
    #[serde(rename = "time-seconds")]
    pub time_seconds: f64,
    pub output: Value,
    #[serde(rename = "dry-output")]
    pub dry_output: Value,
}

fn read_json(path: &Path) -> GResult<Value> {
    let file = File::open(path)
        .map_err(|e| GError::UnexpectIO(format!("open {}", path.display()), e))?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}

fn write_json<T: Serialize>(path: &Path, data: &T) -> GResult<()> {
    let file = File::create(path)
        .map_err(|e| GError::UnexpectIO(format!("create {}", path.display()), e))?;
    let mut w = BufWriter::new(file);
    serde_json::to_writer(&mut w, data)?;
    w.flush()?;
    Ok(())
}

/// Runs `setup` on the `"data"` member of the input file: once untimed, then
/// once timed. Both results and the timed duration are written to `output`.
pub fn perform<S, P, Q>(setup: &S, input: P, output: Q) -> GResult<Report>
where
    S: Setup,
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let (input, output) = (input.as_ref(), output.as_ref());

    tracing::info!(path = %input.display(), "load json");
    let input_json = read_json(input)?;

    tracing::info!("import data");
    let record = input_json
        .get("data")
        .ok_or("input has no \"data\" member")?;
    let problem = setup.input(record)?;

    tracing::info!("dry run");
    let dry_output = setup.compute(&problem)?;

    tracing::info!("run");
    let start = Instant::now();
    let out = setup.compute(&problem)?;
    let elapsed = start.elapsed();

    tracing::info!(micros = elapsed.as_micros() as u64, "export data");
    let report = Report {
        time_seconds: 1.0e-6 * elapsed.as_micros() as f64,
        output: setup.output(&out),
        dry_output: setup.output(&dry_output),
    };

    tracing::info!(path = %output.display(), "save data");
    write_json(output, &report)?;
    tracing::info!("done");
    Ok(report)
}
