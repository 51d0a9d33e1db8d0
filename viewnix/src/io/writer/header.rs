//! Header writing.

mod display;
mod field;
mod general;
mod scene;
mod structure;

use std::io::{Seek, Write};

use bstr::BString;

use crate::{
    data_set_type::DataSetType,
    error::{Error, FieldError},
    header::{Body, Header},
    spec::Directory,
};

use self::field::FieldWriter;

const SCENE_GROUP: u16 = 0x0029;
const STRUCTURE_GROUP: u16 = 0x002b;
const DISPLAY_GROUP: u16 = 0x002d;

pub(super) fn write_header<W>(
    writer: &mut W,
    header: &Header,
    directory: &Directory,
    data_set_type: DataSetType,
) -> Result<Option<FieldError>, Error>
where
    W: Write + Seek,
{
    let mut fields = FieldWriter::new(writer, directory);

    general::write_general(&mut fields, &header.general)?;

    match &header.body {
        Body::Scene(scene) => {
            scene::write_scene(&mut fields, scene)?;
            fields.flush_group(STRUCTURE_GROUP)?;
            fields.flush_group(DISPLAY_GROUP)?;
        }
        Body::Structure(structure) => {
            fields.flush_group(SCENE_GROUP)?;
            structure::write_structure(&mut fields, structure)?;
            fields.flush_group(DISPLAY_GROUP)?;
        }
        Body::Display(display) => {
            fields.flush_group(SCENE_GROUP)?;
            fields.flush_group(STRUCTURE_GROUP)?;
            display::write_display(&mut fields, display)?;
        }
    }

    fields.finish(data_set_type)
}

// Number of entries of the hierarchical sample table: one grand total for
// three-dimensional data, plus one entry per sample of each level above the
// last two dimensions.
fn count_entries(samples: &[i16], dimension: i32) -> usize {
    if dimension < 3 || samples.is_empty() {
        return 0;
    }

    let mut entries = 1;
    let mut last_level = i32::from(samples[0]);

    for _ in 0..dimension - 3 {
        let mut level = 0;

        for _ in 0..last_level {
            level += samples.get(entries).map(|&n| i32::from(n)).unwrap_or_default();
            entries += 1;
        }

        last_level = level;
    }

    entries
}

// Total number of sample locations: the sum of the slice counts of every
// entry of the sample table.
fn location_total(samples: &[i16], entries: usize) -> i32 {
    samples
        .iter()
        .take(entries)
        .map(|&n| i32::from(n))
        .sum()
}

// Joins up to `count` list entries with `\`.
fn join_labels(labels: &[BString], count: usize) -> Vec<u8> {
    let mut joined = Vec::new();

    for (i, label) in labels.iter().take(count).enumerate() {
        if i > 0 {
            joined.push(b'\\');
        }

        joined.extend_from_slice(label);
    }

    joined
}

fn usize_len(n: i32) -> usize {
    usize::try_from(n).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_entries() {
        // 3-dimensional: the grand total is the only entry
        assert_eq!(count_entries(&[12], 3), 1);

        // 4-dimensional: the grand total plus one entry per volume
        assert_eq!(count_entries(&[3, 2, 4, 3], 4), 4);

        assert_eq!(count_entries(&[12], 2), 0);
        assert_eq!(count_entries(&[], 3), 0);
    }

    #[test]
    fn test_location_total() {
        assert_eq!(location_total(&[12], 1), 12);
        assert_eq!(location_total(&[3, 2, 4, 3], 4), 12);
        assert_eq!(location_total(&[], 0), 0);
    }

    #[test]
    fn test_join_labels() {
        let labels = [BString::from("x"), BString::from("y"), BString::from("z")];
        assert_eq!(join_labels(&labels, 3), b"x\\y\\z");
        assert_eq!(join_labels(&labels, 2), b"x\\y");
        assert_eq!(join_labels(&labels, 0), b"");
    }
}
