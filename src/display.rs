use crate::model::Catalog;
use eyre::{Error, WrapErr};
use std::io::Write;

pub fn display_details(catalog: &Catalog, out: &mut impl Write) -> Result<(), Error> {
    if catalog.is_empty() {
        writeln!(out, "No projects.")?;
        return Ok(());
    }
    for (key, p) in catalog.iter() {
        write!(out, "{key}. {}", p.title)?;
        if !p.description.is_empty() {
            write!(out, " - {}", p.description)?;
        }
        if p.has_image() {
            write!(out, " <{}>", p.image)?;
        } else {
            write!(out, " (no image)")?;
        }
        writeln!(out)?;
    }
    Ok(())
}

pub fn display_csv(catalog: &Catalog, out: &mut impl Write) -> Result<(), Error> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(["key", "title", "description", "image"])?;
    for (key, p) in catalog.iter() {
        writer
            .write_record([
                key.to_string().as_str(),
                p.title.as_str(),
                p.description.as_str(),
                p.image.as_str(),
            ])
            .wrap_err_with(|| format!("cannot write record for project {p}"))?;
    }
    writer.flush()?;
    Ok(())
}

pub fn display_summary(catalog: &Catalog, out: &mut impl Write) -> Result<(), Error> {
    let without_image = catalog
        .projects()
        .iter()
        .filter(|p| !p.has_image())
        .count();
    writeln!(
        out,
        "Projects with/without image/total: {}/{}/{}",
        catalog.len() - without_image,
        without_image,
        catalog.len()
    )?;
    Ok(())
}
