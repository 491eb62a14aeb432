use crate::models::Country;
use anyhow::Result;
use csv::WriterBuilder;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Save country summaries as CSV with header.
pub fn save_csv<P: AsRef<Path>>(countries: &[Country], path: P) -> Result<()> {
    let mut wtr = WriterBuilder::new().from_path(path)?;
    wtr.serialize(("name", "flag", "population", "region"))?;
    for c in countries {
        wtr.serialize((&c.name, &c.flag, c.population, &c.region))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Save country summaries as pretty JSON array.
pub fn save_json<P: AsRef<Path>>(countries: &[Country], path: P) -> Result<()> {
    let mut f = File::create(path)?;
    let s = serde_json::to_string_pretty(countries)?;
    f.write_all(s.as_bytes())?;
    Ok(())
}
