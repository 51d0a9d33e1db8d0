//! 3DVIEWNIX writer.

mod header;
pub(crate) mod num;

use std::io::{Read, Seek, SeekFrom, Write};

use crate::{
    data_set_type::DataSetType,
    error::{Error, FieldError},
    header::Header,
    spec::{Directories, Directory},
};

use self::num::{write_i32_be, write_u16_be, write_u32_be};
use super::reader::header_length;

/// A 3DVIEWNIX writer.
///
/// Writes a header and the data part that follows it to any seekable byte
/// stream. Group lengths are backpatched as the header grows, so the stream
/// must support seeking back over what was already written.
///
/// # Examples
///
/// ```
/// use std::io::Cursor;
/// use viewnix::{
///     DataSetType, Field, Header,
///     header::{Body, Display},
///     io::Writer,
///     spec::Directories,
/// };
///
/// let mut header = Header {
///     general: Default::default(),
///     body: Body::Display(Display::default()),
/// };
/// header.general.recognition_code = Field::new("VIEWNIX1.0".into());
/// header.general.data_type = Field::new(DataSetType::Movie0.value());
///
/// let mut writer = Writer::new(Cursor::new(Vec::new()));
/// writer.write_header_with(&header, &Directories::bundled())?;
/// # Ok::<_, viewnix::Error>(())
/// ```
pub struct Writer<W> {
    inner: W,
}

impl<W> Writer<W> {
    /// Creates a 3DVIEWNIX writer.
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Returns a reference to the underlying writer.
    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    /// Returns a mutable reference to the underlying writer.
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.inner
    }

    /// Unwraps and returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W> Writer<W>
where
    W: Write + Seek,
{
    /// Writes the header, resolving the tag directory from `$VIEWNIX_ENV`.
    ///
    /// The data set type field selects the record kind and must be valid. On
    /// success, the second value reports the worst invalid field written out
    /// empty, if any; the stream is left positioned at the start of the data
    /// part.
    pub fn write_header(&mut self, header: &Header) -> Result<Option<FieldError>, Error> {
        self.write_header_inner(header, Directory::open)
    }

    /// Writes the header using the given tag directories.
    pub fn write_header_with(
        &mut self,
        header: &Header,
        directories: &Directories,
    ) -> Result<Option<FieldError>, Error> {
        self.write_header_inner(header, |kind| Ok(directories.get(kind).clone()))
    }

    fn write_header_inner<F>(
        &mut self,
        header: &Header,
        directory: F,
    ) -> Result<Option<FieldError>, Error>
    where
        F: FnOnce(crate::data_set_type::RecordKind) -> Result<Directory, Error>,
    {
        let n = *header.general.data_type.value();

        if !header.general.data_type.is_valid() {
            return Err(Error::InvalidDataSetType(n));
        }

        let data_set_type = DataSetType::from_value(n).ok_or(Error::InvalidDataSetType(n))?;

        if data_set_type.kind() != header.kind() {
            return Err(Error::InvalidDataSetType(n));
        }

        let directory = directory(data_set_type.kind())?;

        header::write_header(&mut self.inner, header, &directory, data_set_type)
    }
}

impl<W> Writer<W>
where
    W: Write,
{
    /// Writes bytes of the data part.
    pub fn write_data_8(&mut self, data: &[u8]) -> Result<(), Error> {
        self.inner.write_all(data).map_err(Error::Write)
    }

    /// Writes big-endian 16-bit items of the data part.
    pub fn write_data_16(&mut self, data: &[u16]) -> Result<(), Error> {
        for &n in data {
            write_u16_be(&mut self.inner, n).map_err(Error::Write)?;
        }

        Ok(())
    }

    /// Writes big-endian 32-bit items of the data part.
    pub fn write_data_32(&mut self, data: &[u32]) -> Result<(), Error> {
        for &n in data {
            write_u32_be(&mut self.inner, n).map_err(Error::Write)?;
        }

        Ok(())
    }
}

impl<W> Writer<W>
where
    W: Read + Write + Seek,
{
    /// Finalizes the lengths that depend on the size of the data part.
    ///
    /// Backpatches the terminal group's length and the command and
    /// identification message lengths from the final stream size. Call after
    /// the whole data part has been written.
    pub fn close_data(&mut self) -> Result<(), Error> {
        let end = self.inner.seek(SeekFrom::End(0)).map_err(Error::Seek)?;
        let start = u64::from(header_length(&mut self.inner)?);
        let length = end.saturating_sub(start);

        // the terminal group length slot sits 12 bytes before the data part
        self.inner
            .seek(SeekFrom::Start(start - 12))
            .map_err(Error::Seek)?;

        write_u32_be(&mut self.inner, length as u32 + 8).map_err(Error::Write)?;

        // command message length at (0000,0001)
        self.inner.seek(SeekFrom::Start(20)).map_err(Error::Seek)?;
        write_i32_be(&mut self.inner, end as i32 - 24).map_err(Error::Write)?;

        // identification message length at (0008,0001), past the command
        // group
        self.inner.seek(SeekFrom::Start(8)).map_err(Error::Seek)?;

        let mut buf = [0; 4];
        self.inner.read_exact(&mut buf).map_err(Error::Read)?;
        let command_length = u32::from_be_bytes(buf) + 12;

        self.inner
            .seek(SeekFrom::Start(u64::from(command_length) + 20))
            .map_err(Error::Seek)?;

        write_i32_be(&mut self.inner, end as i32 - 24 - command_length as i32)
            .map_err(Error::Write)?;

        Ok(())
    }
}
