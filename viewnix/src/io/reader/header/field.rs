//! Field frame scanning and decoding.

use std::{
    io::{self, Read, Seek, SeekFrom},
    slice,
};

use bstr::BString;

use crate::{
    error::{Error, FieldError},
    field::Field,
    spec::{Directory, Item, Tag},
};

use super::super::num::{parse_float_prefix, read_i16_be, read_i32_be, read_u16_be, read_u32_be};

// C-string truncation of per-axis labels.
const LABEL_MAX: usize = 30;

/// The expected element count of an array field.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(in super::super) enum Count {
    /// The count is derived from fields read earlier.
    Fixed(i32),
    /// The stored array describes its own length: its first element is one
    /// less than the element count.
    SelfDescribing,
}

/// Decodes fields in tag directory order.
///
/// Fields are consumed positionally: each decode call pairs the next
/// directory item with the next frame of the stream. A frame whose tag is
/// beyond the expected item marks the item absent and stays pending for the
/// following call, so one lookahead tag is enough to resynchronize.
pub(in super::super) struct FieldReader<'a, R> {
    inner: &'a mut R,
    items: slice::Iter<'a, Item>,
    pending: Option<Tag>,
    error: Option<FieldError>,
}

impl<'a, R> FieldReader<'a, R>
where
    R: Read + Seek,
{
    pub(in super::super) fn new(inner: &'a mut R, directory: &'a Directory) -> Self {
        Self {
            inner,
            items: directory.items().iter(),
            pending: None,
            error: None,
        }
    }

    /// Returns the worst missing-field report.
    pub(in super::super) fn finish(self) -> Option<FieldError> {
        self.error
    }

    fn next_item(&mut self) -> Result<&'a Item, Error> {
        self.items.next().ok_or_else(|| {
            Error::Directory(io::Error::new(
                io::ErrorKind::InvalidData,
                "tag directory exhausted",
            ))
        })
    }

    fn note(&mut self, item: &Item) {
        FieldError::note(&mut self.error, item);
    }

    fn read_tag(&mut self) -> Result<Tag, Error> {
        let group = read_u16_be(self.inner).map_err(Error::Read)?;
        let element = read_u16_be(self.inner).map_err(Error::Read)?;
        Ok(Tag::new(group, element))
    }

    fn read_length(&mut self) -> Result<u32, Error> {
        read_u32_be(self.inner).map_err(Error::Read)
    }

    fn read_body(&mut self, len: u32) -> Result<Vec<u8>, Error> {
        let mut buf = vec![0; len as usize];
        self.inner.read_exact(&mut buf).map_err(Error::Read)?;
        Ok(buf)
    }

    fn skip(&mut self, len: u32) -> Result<(), Error> {
        self.inner
            .seek(SeekFrom::Current(i64::from(len)))
            .map_err(Error::Seek)?;
        Ok(())
    }

    // Advances the stream to the frame of the expected item, leaving it at
    // the length word. Unknown groups before the item are skipped over via
    // their group length pseudo-fields; unknown elements within the item's
    // group are skipped via their lengths.
    fn locate(&mut self, item: &Item) -> Result<bool, Error> {
        let mut tag = match self.pending.take() {
            Some(tag) => tag,
            None => self.read_tag()?,
        };

        while tag.group() < item.group() {
            let _len = self.read_length()?;
            let group_length = self.read_length()?;
            self.skip(group_length)?;
            tag = self.read_tag()?;
        }

        if tag.group() > item.group() {
            return Ok(self.miss(item, tag));
        }

        while tag.element() < item.element() {
            let len = self.read_length()?;
            self.skip(len)?;

            tag = self.read_tag()?;

            if tag.group() > item.group() {
                return Ok(self.miss(item, tag));
            }
        }

        if tag.element() > item.element() {
            return Ok(self.miss(item, tag));
        }

        Ok(true)
    }

    // The frame at `tag` belongs to a later item. It becomes the lookahead
    // for the next probe, and the expected item is reported absent.
    fn miss(&mut self, item: &Item, tag: Tag) -> bool {
        self.pending = Some(tag);
        self.note(item);
        false
    }

    /// Decodes a string field truncated to `max - 1` bytes.
    pub(in super::super) fn string(&mut self, max: usize) -> Result<Field<BString>, Error> {
        self.string_inner(Some(max))
    }

    /// Decodes an unbounded string field.
    pub(in super::super) fn text(&mut self) -> Result<Field<BString>, Error> {
        self.string_inner(None)
    }

    fn string_inner(&mut self, max: Option<usize>) -> Result<Field<BString>, Error> {
        let item = self.next_item()?;

        if !self.locate(item)? {
            return Ok(Field::default());
        }

        let len = self.read_length()?;

        if len == 0 {
            self.note(item);
            return Ok(Field::default());
        }

        let buf = self.read_body(len)?;

        Ok(Field::new(clean_string(buf, max).into()))
    }

    /// Decodes a `\`-separated label list sized to `count` entries.
    pub(in super::super) fn labels(&mut self, count: i16) -> Result<Field<Vec<BString>>, Error> {
        let text = self.text()?;

        if !text.is_valid() {
            return Ok(Field::default());
        }

        let mut entries: Vec<BString> = text
            .value()
            .split(|&b| b == b'\\')
            .map(|part| {
                let mut part = part.to_vec();
                part.truncate(LABEL_MAX);
                BString::from(part)
            })
            .collect();

        entries.resize(checked_len(i32::from(count)), BString::from(""));

        Ok(Field::new(entries))
    }

    /// Decodes a 16-bit integer field.
    pub(in super::super) fn short(&mut self) -> Result<Field<i16>, Error> {
        let item = self.next_item()?;

        if !self.locate(item)? {
            return Ok(Field::default());
        }

        let len = self.read_length()?;

        if len == 0 {
            self.note(item);
            return Ok(Field::default());
        }

        let n = read_i16_be(self.inner).map_err(Error::Read)?;

        Ok(Field::new(n))
    }

    /// Decodes a 16-bit integer array field resized to the expected count.
    ///
    /// A stored count that disagrees with the expected one is padded with -1
    /// or truncated, and the field is reported but kept as a placeholder.
    pub(in super::super) fn shorts(&mut self, count: Count) -> Result<Field<Vec<i16>>, Error> {
        let item = self.next_item()?;

        if !self.locate(item)? {
            return Ok(Field::default());
        }

        let len = self.read_length()?;

        if len == 0 {
            self.note(item);
            return Ok(Field::default());
        }

        let mut values = Vec::with_capacity((len / 2) as usize);

        for _ in 0..len / 2 {
            values.push(read_i16_be(self.inner).map_err(Error::Read)?);
        }

        let expected = match count {
            Count::Fixed(n) => n,
            Count::SelfDescribing => i32::from(values.first().copied().unwrap_or(-1)) + 1,
        };

        Ok(self.resize(item, values, expected, -1))
    }

    /// Decodes a 16-bit unsigned array field (lookup table data).
    pub(in super::super) fn ushorts(&mut self, count: i32) -> Result<Field<Vec<u16>>, Error> {
        let item = self.next_item()?;

        if !self.locate(item)? {
            return Ok(Field::default());
        }

        let len = self.read_length()?;

        if len == 0 {
            self.note(item);
            return Ok(Field::default());
        }

        let mut values = Vec::with_capacity((len / 2) as usize);

        for _ in 0..len / 2 {
            values.push(read_u16_be(self.inner).map_err(Error::Read)?);
        }

        Ok(self.resize(item, values, count, u16::MAX))
    }

    /// Decodes a 32-bit integer array field.
    ///
    /// A self-describing count is taken at face value: the stored elements
    /// are returned as is.
    pub(in super::super) fn ints(&mut self, count: Count) -> Result<Field<Vec<i32>>, Error> {
        let item = self.next_item()?;

        if !self.locate(item)? {
            return Ok(Field::default());
        }

        let len = self.read_length()?;

        if len == 0 {
            self.note(item);
            return Ok(Field::default());
        }

        let mut values = Vec::with_capacity((len / 4) as usize);

        for _ in 0..len / 4 {
            values.push(read_i32_be(self.inner).map_err(Error::Read)?);
        }

        match count {
            Count::Fixed(n) => Ok(self.resize(item, values, n, -1)),
            Count::SelfDescribing => Ok(Field::new(values)),
        }
    }

    /// Decodes a 16-bit integer array field of a compile-time length.
    pub(in super::super) fn shorts_fixed<const N: usize>(
        &mut self,
    ) -> Result<Field<[i16; N]>, Error> {
        let item = self.next_item()?;

        if !self.locate(item)? {
            return Ok(Field::fallback([0; N]));
        }

        let len = self.read_length()?;

        if len == 0 {
            self.note(item);
            return Ok(Field::fallback([-1; N]));
        }

        let stored = (len / 2) as usize;
        let mut values = [-1; N];

        for value in values.iter_mut().take(stored) {
            *value = read_i16_be(self.inner).map_err(Error::Read)?;
        }

        // excess elements are consumed but dropped
        for _ in N..stored {
            let _ = read_i16_be(self.inner).map_err(Error::Read)?;
        }

        if stored == N {
            Ok(Field::new(values))
        } else {
            self.note(item);
            Ok(Field::fallback(values))
        }
    }

    /// Decodes a floating-point field stored as decimal text.
    pub(in super::super) fn float(&mut self) -> Result<Field<f32>, Error> {
        let item = self.next_item()?;

        if !self.locate(item)? {
            return Ok(Field::default());
        }

        let len = self.read_length()?;

        if len == 0 {
            self.note(item);
            return Ok(Field::default());
        }

        let buf = self.read_body(len)?;

        Ok(Field::new(parse_float_prefix(&buf)))
    }

    /// Decodes a floating-point array field stored as separated decimal
    /// text.
    pub(in super::super) fn floats(&mut self, count: Count) -> Result<Field<Vec<f32>>, Error> {
        let item = self.next_item()?;

        if !self.locate(item)? {
            return Ok(Field::default());
        }

        let len = self.read_length()?;

        if len == 0 {
            self.note(item);
            return Ok(Field::default());
        }

        let buf = self.read_body(len)?;
        let values = split_floats(&buf);

        match count {
            Count::Fixed(n) => Ok(self.resize(item, values, n, -1.0)),
            Count::SelfDescribing => Ok(Field::new(values)),
        }
    }

    /// Decodes a floating-point array field of a compile-time length.
    pub(in super::super) fn floats_fixed<const N: usize>(
        &mut self,
    ) -> Result<Field<[f32; N]>, Error> {
        let item = self.next_item()?;

        if !self.locate(item)? {
            return Ok(Field::fallback([0.0; N]));
        }

        let len = self.read_length()?;

        if len == 0 {
            self.note(item);
            return Ok(Field::fallback([-1.0; N]));
        }

        let buf = self.read_body(len)?;
        let stored = split_floats(&buf);

        let mut values = [-1.0; N];

        for (dst, src) in values.iter_mut().zip(&stored) {
            *dst = *src;
        }

        if stored.len() == N {
            Ok(Field::new(values))
        } else {
            self.note(item);
            Ok(Field::fallback(values))
        }
    }

    fn resize<T>(&mut self, item: &Item, mut values: Vec<T>, expected: i32, pad: T) -> Field<Vec<T>>
    where
        T: Copy,
    {
        let expected_len = checked_len(expected);
        let matches = expected >= 0 && values.len() == expected_len;

        values.resize(expected_len, pad);

        if matches {
            Field::new(values)
        } else {
            self.note(item);
            Field::fallback(values)
        }
    }
}

// Both `\` and `/` were used as separators over the life of the format.
fn split_floats(src: &[u8]) -> Vec<f32> {
    src.split(|&b| b == b'\\' || b == b'/')
        .map(parse_float_prefix)
        .collect()
}

// C-string semantics: the value ends at the first NUL, is clamped to the
// destination size, and loses the single pad space the writer may have
// appended.
fn clean_string(mut buf: Vec<u8>, max: Option<usize>) -> Vec<u8> {
    if let Some(pos) = buf.iter().position(|&b| b == 0) {
        buf.truncate(pos);
    }

    if let Some(max) = max {
        if buf.len() >= max {
            buf.truncate(max.saturating_sub(1));
        }
    }

    if buf.last() == Some(&b' ') {
        buf.pop();
    }

    buf
}

fn checked_len(n: i32) -> usize {
    usize::try_from(n).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::spec::Requirement;

    fn directory(items: &[(u16, u16, Requirement)]) -> Directory {
        let src: String = items
            .iter()
            .map(|(group, element, requirement)| {
                let token = match requirement {
                    Requirement::Required => "1",
                    Requirement::RequiredWithDefault => "1D",
                    Requirement::Optional => "2",
                    Requirement::OptionalWithDefault => "2D",
                    Requirement::Conditional => "3",
                };
                format!("{group:04X} {element:04X} {token} field\n")
            })
            .collect();

        Directory::from_reader(src.as_bytes()).unwrap()
    }

    #[test]
    fn test_string() -> Result<(), Error> {
        let directory = directory(&[(0x0008, 0x0010, Requirement::Required)]);

        let data = [
            0x00, 0x08, 0x00, 0x10, // (0008,0010)
            0x00, 0x00, 0x00, 0x0a, // length = 10
            b'V', b'I', b'E', b'W', b'N', b'I', b'X', b'1', b'.', b'0',
        ];

        let mut reader = Cursor::new(&data[..]);
        let mut fields = FieldReader::new(&mut reader, &directory);

        let field = fields.string(80)?;
        assert_eq!(field.get(), Some(&BString::from("VIEWNIX1.0")));
        assert!(fields.finish().is_none());

        Ok(())
    }

    #[test]
    fn test_string_with_pad_space() -> Result<(), Error> {
        let directory = directory(&[(0x0008, 0x0060, Requirement::Optional)]);

        let data = [
            0x00, 0x08, 0x00, 0x60, // (0008,0060)
            0x00, 0x00, 0x00, 0x04, // length = 4
            b'C', b'T', b'1', b' ',
        ];

        let mut reader = Cursor::new(&data[..]);
        let mut fields = FieldReader::new(&mut reader, &directory);

        let field = fields.string(10)?;
        assert_eq!(field.get(), Some(&BString::from("CT1")));

        Ok(())
    }

    #[test]
    fn test_string_with_empty_body() -> Result<(), Error> {
        let directory = directory(&[(0x0008, 0x0060, Requirement::Optional)]);

        let data = [
            0x00, 0x08, 0x00, 0x60, // (0008,0060)
            0x00, 0x00, 0x00, 0x00, // length = 0
        ];

        let mut reader = Cursor::new(&data[..]);
        let mut fields = FieldReader::new(&mut reader, &directory);

        let field = fields.string(10)?;
        assert!(!field.is_valid());

        let e = fields.finish().unwrap();
        assert_eq!(e.code(), 107);
        assert_eq!(e.tag(), Tag::new(0x0008, 0x0060));

        Ok(())
    }

    #[test]
    fn test_absent_field_stays_pending() -> Result<(), Error> {
        let directory = directory(&[
            (0x0029, 0x8000, Requirement::Required),
            (0x0029, 0x8025, Requirement::Required),
        ]);

        // only (0029,8025) is present
        let data = [
            0x00, 0x29, 0x80, 0x25, // (0029,8025)
            0x00, 0x00, 0x00, 0x02, // length = 2
            0x00, 0x03, // 3
        ];

        let mut reader = Cursor::new(&data[..]);
        let mut fields = FieldReader::new(&mut reader, &directory);

        let dimension = fields.short()?;
        assert!(!dimension.is_valid());

        let num_of_density_values = fields.short()?;
        assert_eq!(num_of_density_values.get(), Some(&3));

        let e = fields.finish().unwrap();
        assert_eq!(e.code(), 104);
        assert_eq!(e.tag(), Tag::new(0x0029, 0x8000));

        Ok(())
    }

    #[test]
    fn test_locate_skips_unknown_groups() -> Result<(), Error> {
        let directory = directory(&[(0x0029, 0x8000, Requirement::Required)]);

        let data = [
            0x00, 0x27, 0x00, 0x00, // (0027,0000) unknown group
            0x00, 0x00, 0x00, 0x04, // length = 4
            0x00, 0x00, 0x00, 0x02, // group length = 2
            0xab, 0xcd, // skipped
            0x00, 0x29, 0x80, 0x00, // (0029,8000)
            0x00, 0x00, 0x00, 0x02, // length = 2
            0x00, 0x04, // 4
        ];

        let mut reader = Cursor::new(&data[..]);
        let mut fields = FieldReader::new(&mut reader, &directory);

        let dimension = fields.short()?;
        assert_eq!(dimension.get(), Some(&4));
        assert!(fields.finish().is_none());

        Ok(())
    }

    #[test]
    fn test_locate_skips_unknown_elements() -> Result<(), Error> {
        let directory = directory(&[(0x0029, 0x8025, Requirement::Required)]);

        let data = [
            0x00, 0x29, 0x80, 0x00, // (0029,8000) not in the directory slice
            0x00, 0x00, 0x00, 0x02, // length = 2
            0x00, 0x03, // skipped
            0x00, 0x29, 0x80, 0x25, // (0029,8025)
            0x00, 0x00, 0x00, 0x02, // length = 2
            0x00, 0x01, // 1
        ];

        let mut reader = Cursor::new(&data[..]);
        let mut fields = FieldReader::new(&mut reader, &directory);

        let field = fields.short()?;
        assert_eq!(field.get(), Some(&1));

        Ok(())
    }

    #[test]
    fn test_shorts_with_self_describing_count() -> Result<(), Error> {
        let directory = directory(&[(0x0029, 0x80d0, Requirement::Required)]);

        // 3 volumes of 2, 4, and 3 slices
        let data = [
            0x00, 0x29, 0x80, 0xd0, // (0029,80D0)
            0x00, 0x00, 0x00, 0x08, // length = 8
            0x00, 0x03, 0x00, 0x02, 0x00, 0x04, 0x00, 0x03,
        ];

        let mut reader = Cursor::new(&data[..]);
        let mut fields = FieldReader::new(&mut reader, &directory);

        let field = fields.shorts(Count::SelfDescribing)?;
        assert_eq!(field.get(), Some(&vec![3, 2, 4, 3]));

        Ok(())
    }

    #[test]
    fn test_shorts_with_count_mismatch() -> Result<(), Error> {
        let directory = directory(&[(0x0029, 0x8020, Requirement::RequiredWithDefault)]);

        let data = [
            0x00, 0x29, 0x80, 0x20, // (0029,8020)
            0x00, 0x00, 0x00, 0x04, // length = 4
            0x00, 0x03, 0x00, 0x03,
        ];

        let mut reader = Cursor::new(&data[..]);
        let mut fields = FieldReader::new(&mut reader, &directory);

        let field = fields.shorts(Count::Fixed(4))?;
        assert!(!field.is_valid());
        assert_eq!(field.value(), &[3, 3, -1, -1]);
        assert_eq!(fields.finish().unwrap().code(), 106);

        Ok(())
    }

    #[test]
    fn test_float() -> Result<(), Error> {
        let directory = directory(&[(0x0018, 0x0050, Requirement::Optional)]);

        let data = [
            0x00, 0x18, 0x00, 0x50, // (0018,0050)
            0x00, 0x00, 0x00, 0x0c, // length = 12
            b'1', b'.', b'5', b'0', b'0', b'0', b'0', b'0', b'e', b'+', b'0', b'0',
        ];

        let mut reader = Cursor::new(&data[..]);
        let mut fields = FieldReader::new(&mut reader, &directory);

        let field = fields.float()?;
        assert_eq!(field.get(), Some(&1.5));

        Ok(())
    }

    #[test]
    fn test_floats_accepts_both_separators() -> Result<(), Error> {
        let directory = directory(&[
            (0x0029, 0x80f0, Requirement::Required),
            (0x0029, 0x80f1, Requirement::Required),
        ]);

        let mut data = vec![
            0x00, 0x29, 0x80, 0xf0, // (0029,80F0)
            0x00, 0x00, 0x00, 0x1a, // length = 26
        ];
        data.extend_from_slice(b"1.000000e+00\\2.000000e+00 ");
        data.extend_from_slice(&[
            0x00, 0x29, 0x80, 0xf1, // (0029,80F1)
            0x00, 0x00, 0x00, 0x1a, // length = 26
        ]);
        data.extend_from_slice(b"1.000000e+00/2.000000e+00 ");

        let mut reader = Cursor::new(&data[..]);
        let mut fields = FieldReader::new(&mut reader, &directory);

        let field = fields.floats(Count::Fixed(2))?;
        assert_eq!(field.get(), Some(&vec![1.0, 2.0]));

        let field = fields.floats(Count::Fixed(2))?;
        assert_eq!(field.get(), Some(&vec![1.0, 2.0]));

        Ok(())
    }

    #[test]
    fn test_labels() -> Result<(), Error> {
        let directory = directory(&[(0x0029, 0x8015, Requirement::Optional)]);

        let data = [
            0x00, 0x29, 0x80, 0x15, // (0029,8015)
            0x00, 0x00, 0x00, 0x04, // length = 4
            b'x', b'\\', b'y', b' ',
        ];

        let mut reader = Cursor::new(&data[..]);
        let mut fields = FieldReader::new(&mut reader, &directory);

        let field = fields.labels(3)?;
        assert_eq!(
            field.get(),
            Some(&vec![
                BString::from("x"),
                BString::from("y"),
                BString::from("")
            ])
        );

        Ok(())
    }
}
