//! Field frame encoding.

use std::{
    io::{self, Seek, SeekFrom, Write},
    slice,
};

use bstr::{BString, ByteSlice};

use crate::{
    data_set_type::DataSetType,
    error::{Error, FieldError},
    field::Field,
    spec::{Directory, Item},
};

use super::super::num::{format_exponential, write_i16_be, write_i32_be, write_u16_be, write_u32_be};

// Command and identification group prologue: each group opens with a group
// length field whose value is backpatched later, and a message length field
// patched when the data part is closed. The command group length is fixed.
const PROLOGUE: [u16; 24] = [
    0x0000, 0x0000, 0x0000, 0x0004, 0x0000, 0x000c, // (0000,0000), length 4, value 12
    0x0000, 0x0001, 0x0000, 0x0004, 0x0000, 0x0000, // (0000,0001), length 4, value 0
    0x0008, 0x0000, 0x0000, 0x0004, 0x0000, 0x0000, // (0008,0000), length 4, value 0
    0x0008, 0x0001, 0x0000, 0x0004, 0x0000, 0x0000, // (0008,0001), length 4, value 0
];

/// Encodes fields in tag directory order.
///
/// Each group's length field is written zeroed when the group opens and
/// patched in one seek when the next group begins, so the stream stays
/// append-only within a group.
pub(in super::super) struct FieldWriter<'a, W> {
    inner: &'a mut W,
    items: slice::Iter<'a, Item>,
    error: Option<FieldError>,
    // position of the open group's length slot and the bytes accumulated
    // since it
    length_offset: u64,
    group_length: u32,
}

impl<'a, W> FieldWriter<'a, W>
where
    W: Write + Seek,
{
    pub(in super::super) fn new(inner: &'a mut W, directory: &'a Directory) -> Self {
        Self {
            inner,
            items: directory.items().iter(),
            error: None,
            length_offset: 0,
            group_length: 0,
        }
    }

    /// Writes the command and identification group prologue at the start of
    /// the stream.
    pub(in super::super) fn begin(&mut self) -> Result<(), Error> {
        self.inner.seek(SeekFrom::Start(0)).map_err(Error::Seek)?;

        for n in PROLOGUE {
            write_u16_be(self.inner, n).map_err(Error::Write)?;
        }

        self.group_length = 12;
        self.length_offset = 32;

        Ok(())
    }

    /// Patches the open group's length and opens the given group.
    pub(in super::super) fn flush_group(&mut self, group: u16) -> Result<(), Error> {
        self.inner
            .seek(SeekFrom::Start(self.length_offset))
            .map_err(Error::Seek)?;

        write_u32_be(self.inner, self.group_length).map_err(Error::Write)?;

        self.length_offset += 4 + u64::from(self.group_length);

        self.inner
            .seek(SeekFrom::Start(self.length_offset))
            .map_err(Error::Seek)?;

        for n in [group, 0x0000, 0x0000, 0x0004, 0x0000, 0x0000] {
            write_u16_be(self.inner, n).map_err(Error::Write)?;
        }

        self.length_offset += 8;
        self.group_length = 0;

        Ok(())
    }

    /// Patches the last group's length and writes the terminal data group of
    /// the given data set type.
    pub(in super::super) fn finish(
        mut self,
        data_set_type: DataSetType,
    ) -> Result<Option<FieldError>, Error> {
        self.inner
            .seek(SeekFrom::Start(self.length_offset))
            .map_err(Error::Seek)?;

        write_u32_be(self.inner, self.group_length).map_err(Error::Write)?;

        let skip = self.length_offset + 4 + u64::from(self.group_length);

        self.inner
            .seek(SeekFrom::Start(skip))
            .map_err(Error::Seek)?;

        let terminal: [u16; 10] = match data_set_type {
            DataSetType::Image0 | DataSetType::Image1 => {
                [0x7fe0, 0x0000, 0x0000, 0x0004, 0x0000, 0x0000, 0x7fe0, 0x0010, 0x0000, 0x0000]
            }
            DataSetType::Curve0
            | DataSetType::Surface0
            | DataSetType::Surface1
            | DataSetType::Shell0
            | DataSetType::Shell1
            | DataSetType::Shell2 => {
                [0x8001, 0x0000, 0x0000, 0x0004, 0x0000, 0x0000, 0x8001, 0x8000, 0x0000, 0x0000]
            }
            DataSetType::Movie0 => {
                [0x8021, 0x0000, 0x0000, 0x0004, 0x0000, 0x0000, 0x8021, 0x8000, 0x0000, 0x0000]
            }
        };

        for n in terminal {
            write_u16_be(self.inner, n).map_err(Error::Write)?;
        }

        Ok(self.error)
    }

    fn next_item(&mut self) -> Result<&'a Item, Error> {
        self.items.next().ok_or_else(|| {
            Error::Directory(io::Error::new(
                io::ErrorKind::InvalidData,
                "tag directory exhausted",
            ))
        })
    }

    // An invalid field is still framed: its tag goes out with a zero length,
    // and the miss is recorded.
    fn open_field(&mut self, valid: bool) -> Result<&'a Item, Error> {
        let item = self.next_item()?;

        if !valid {
            FieldError::note(&mut self.error, item);
        }

        write_u16_be(self.inner, item.group()).map_err(Error::Write)?;
        write_u16_be(self.inner, item.element()).map_err(Error::Write)?;

        Ok(item)
    }

    fn write_body(&mut self, body: &[u8]) -> Result<(), Error> {
        write_u32_be(self.inner, body.len() as u32).map_err(Error::Write)?;
        self.inner.write_all(body).map_err(Error::Write)?;
        self.group_length += 8 + body.len() as u32;
        Ok(())
    }

    fn write_empty(&mut self) -> Result<(), Error> {
        write_u32_be(self.inner, 0).map_err(Error::Write)?;
        self.group_length += 8;
        Ok(())
    }

    /// Encodes a string field, padded to an even byte count.
    pub(in super::super) fn string(&mut self, field: &Field<BString>) -> Result<(), Error> {
        self.string_value(field.value(), field.is_valid())
    }

    /// Encodes string bytes with an explicit validity.
    pub(in super::super) fn string_value(&mut self, value: &[u8], valid: bool) -> Result<(), Error> {
        self.open_field(valid)?;

        let end = value.find_byte(0).unwrap_or(value.len());
        let value = &value[..end];

        if !valid || value.is_empty() {
            return self.write_empty();
        }

        let mut body = value.to_vec();

        if body.len() % 2 != 0 {
            body.push(b' ');
        }

        self.write_body(&body)
    }

    /// Encodes a 16-bit integer field.
    pub(in super::super) fn short(&mut self, field: &Field<i16>) -> Result<(), Error> {
        self.open_field(field.is_valid())?;

        if !field.is_valid() {
            return self.write_empty();
        }

        write_u32_be(self.inner, 2).map_err(Error::Write)?;
        write_i16_be(self.inner, *field.value()).map_err(Error::Write)?;
        self.group_length += 10;

        Ok(())
    }

    /// Encodes a 16-bit integer array field with the given element count.
    pub(in super::super) fn shorts(&mut self, field: &Field<Vec<i16>>, count: i32) -> Result<(), Error> {
        self.shorts_value(field.value(), field.is_valid(), count)
    }

    /// Encodes a 16-bit integer array field of a compile-time length.
    pub(in super::super) fn shorts_fixed<const N: usize>(
        &mut self,
        field: &Field<[i16; N]>,
    ) -> Result<(), Error> {
        self.shorts_value(field.value(), field.is_valid(), N as i32)
    }

    fn shorts_value(&mut self, values: &[i16], valid: bool, count: i32) -> Result<(), Error> {
        self.open_field(valid)?;

        let n = element_count(values.len(), valid, count);

        write_u32_be(self.inner, (n * 2) as u32).map_err(Error::Write)?;

        for &value in &values[..n] {
            write_i16_be(self.inner, value).map_err(Error::Write)?;
        }

        self.group_length += 8 + (n * 2) as u32;

        Ok(())
    }

    /// Encodes a 16-bit unsigned array field (lookup table data).
    pub(in super::super) fn ushorts(&mut self, field: &Field<Vec<u16>>, count: i32) -> Result<(), Error> {
        self.open_field(field.is_valid())?;

        let values = field.value();
        let n = element_count(values.len(), field.is_valid(), count);

        write_u32_be(self.inner, (n * 2) as u32).map_err(Error::Write)?;

        for &value in &values[..n] {
            write_u16_be(self.inner, value).map_err(Error::Write)?;
        }

        self.group_length += 8 + (n * 2) as u32;

        Ok(())
    }

    /// Encodes a 32-bit integer array field with the given element count.
    pub(in super::super) fn ints(&mut self, field: &Field<Vec<i32>>, count: i32) -> Result<(), Error> {
        self.open_field(field.is_valid())?;

        let values = field.value();
        let n = element_count(values.len(), field.is_valid(), count);

        write_u32_be(self.inner, (n * 4) as u32).map_err(Error::Write)?;

        for &value in &values[..n] {
            write_i32_be(self.inner, value).map_err(Error::Write)?;
        }

        self.group_length += 8 + (n * 4) as u32;

        Ok(())
    }

    /// Encodes a floating-point field as decimal text.
    pub(in super::super) fn float(&mut self, field: &Field<f32>) -> Result<(), Error> {
        self.open_field(field.is_valid())?;

        if !field.is_valid() {
            return self.write_empty();
        }

        let mut body = format_exponential(*field.value()).into_bytes();

        if body.len() % 2 != 0 {
            body.push(b' ');
        }

        self.write_body(&body)
    }

    /// Encodes a floating-point array field as `\`-separated decimal text.
    pub(in super::super) fn floats(&mut self, field: &Field<Vec<f32>>, count: i32) -> Result<(), Error> {
        self.floats_value(field.value(), field.is_valid(), count)
    }

    /// Encodes a floating-point array field of a compile-time length.
    pub(in super::super) fn floats_fixed<const N: usize>(
        &mut self,
        field: &Field<[f32; N]>,
    ) -> Result<(), Error> {
        self.floats_value(field.value(), field.is_valid(), N as i32)
    }

    fn floats_value(&mut self, values: &[f32], valid: bool, count: i32) -> Result<(), Error> {
        self.open_field(valid)?;

        let n = element_count(values.len(), valid, count);

        if n == 0 {
            return self.write_empty();
        }

        let mut body = Vec::new();

        for (i, &value) in values[..n].iter().enumerate() {
            if i > 0 {
                body.push(b'\\');
            }

            body.extend_from_slice(format_exponential(value).as_bytes());
        }

        if body.len() % 2 != 0 {
            body.push(b' ');
        }

        self.write_body(&body)
    }
}

fn element_count(len: usize, valid: bool, count: i32) -> usize {
    if valid {
        len.min(usize::try_from(count).unwrap_or_default())
    } else {
        0
    }
}
