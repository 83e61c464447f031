//! `fvar` axis extraction.

use log::debug;
use read_fonts::{
    FontRef, TableProvider,
    tables::name::Name,
    types::NameId,
};

use crate::{
    FontAxis,
    error::{Error, Result},
};

/// `fvar` axis flag asking applications to hide the axis from users.
const HIDDEN_AXIS: u16 = 0x0001;

const WINDOWS_PLATFORM: u16 = 3;
const ENGLISH_US: u16 = 0x0409;

/// Read the variation axes declared by a TrueType or OpenType font.
///
/// Axes are returned in `fvar` order.
///
/// # Errors
///
/// - `Error::Compressed` for WOFF and WOFF2 containers
/// - `Error::Parse` if the data is not a readable font
/// - `Error::NotVariableFont` if the font has no fvar table
pub fn read_axes(data: &[u8]) -> Result<Vec<FontAxis>> {
    match data.get(..4) {
        Some(b"wOF2") => return Err(Error::Compressed("WOFF2")),
        Some(b"wOFF") => return Err(Error::Compressed("WOFF")),
        _ => {}
    }

    let font = FontRef::new(data)?;
    let fvar = font.fvar().map_err(|_| Error::NotVariableFont)?;
    let names = font.name().ok();

    let axes = fvar
        .axes()?
        .iter()
        .map(|record| {
            let tag = record.axis_tag().to_string();
            let name = names
                .as_ref()
                .and_then(|names| lookup_name(names, record.axis_name_id()))
                .unwrap_or_else(|| tag.clone());
            FontAxis {
                tag,
                name,
                min: record.min_value().to_f64(),
                default: record.default_value().to_f64(),
                max: record.max_value().to_f64(),
                hidden: record.flags() & HIDDEN_AXIS != 0,
            }
        })
        .collect::<Vec<_>>();

    debug!("read {} axes from fvar", axes.len());
    Ok(axes)
}

/// Find a name string, preferring the Windows English (US) record.
fn lookup_name(name: &Name, name_id: NameId) -> Option<String> {
    let mut fallback = None;

    for record in name.name_record() {
        if record.name_id() != name_id {
            continue;
        }
        let Ok(string) = record.string(name.string_data()) else {
            continue;
        };
        let string = string.chars().collect::<String>();
        if record.platform_id() == WINDOWS_PLATFORM && record.language_id() == ENGLISH_US {
            return Some(string);
        }
        fallback.get_or_insert(string);
    }

    fallback.filter(|s| !s.is_empty())
}
