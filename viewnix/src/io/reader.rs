//! 3DVIEWNIX reader.

mod header;
pub(crate) mod num;

use std::io::{Read, Seek, SeekFrom};

use crate::{
    RECOGNITION_CODE,
    data_set_type::{DataSetType, RecordKind},
    error::{Error, FieldError},
    header::Header,
    spec::{Directories, Directory},
};

use self::num::{read_u16_be, read_u32_be};

const GROUP_PIXEL_DATA: u16 = 0x7fe0;
const GROUP_STRUCTURE_DATA: u16 = 0x8001;
const GROUP_DISPLAY_DATA: u16 = 0x8021;

/// A 3DVIEWNIX reader.
///
/// Reads a header and the data part that follows it from any seekable byte
/// stream.
///
/// # Examples
///
/// ```no_run
/// use std::fs::File;
/// use viewnix::{io::Reader, spec::Directories};
///
/// let mut reader = File::open("scene.IM0").map(Reader::new)?;
/// let (header, _report) = reader.read_header_with(&Directories::bundled())?;
/// # Ok::<_, Box<dyn std::error::Error>>(())
/// ```
pub struct Reader<R> {
    inner: R,
}

impl<R> Reader<R> {
    /// Creates a 3DVIEWNIX reader.
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    /// Returns a reference to the underlying reader.
    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    /// Returns a mutable reference to the underlying reader.
    pub fn get_mut(&mut self) -> &mut R {
        &mut self.inner
    }

    /// Unwraps and returns the underlying reader.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R> Reader<R>
where
    R: Read + Seek,
{
    /// Reads the header, resolving the tag directory from `$VIEWNIX_ENV`.
    ///
    /// On success, the second value reports the worst field found absent or
    /// malformed, if any; the corresponding fields of the returned header are
    /// marked invalid or hold substituted defaults.
    pub fn read_header(&mut self) -> Result<(Header, Option<FieldError>), Error> {
        self.read_header_inner(Directory::open)
    }

    /// Reads the header using the given tag directories.
    pub fn read_header_with(
        &mut self,
        directories: &Directories,
    ) -> Result<(Header, Option<FieldError>), Error> {
        self.read_header_inner(|kind| Ok(directories.get(kind).clone()))
    }

    fn read_header_inner<F>(&mut self, directory: F) -> Result<(Header, Option<FieldError>), Error>
    where
        F: FnOnce(RecordKind) -> Result<Directory, Error>,
    {
        let code = header::read_recognition_code(&mut self.inner)?;

        if code != RECOGNITION_CODE {
            return Err(Error::InvalidRecognitionCode(code));
        }

        let n = header::read_data_set_type(&mut self.inner)?;
        let data_set_type = DataSetType::from_value(n).ok_or(Error::InvalidDataSetType(n))?;

        let directory = directory(data_set_type.kind())?;

        self.inner.seek(SeekFrom::Start(0)).map_err(Error::Seek)?;

        header::read_header(&mut self.inner, &directory, data_set_type.kind())
    }

    /// Returns the total length of the header part in bytes.
    ///
    /// Walks the group length chain from the start of the stream to the
    /// terminal data group, leaving the position unspecified.
    pub fn get_header_length(&mut self) -> Result<u32, Error> {
        header_length(&mut self.inner)
    }

    /// Positions the stream `offset` bytes into the data part.
    pub fn seek_data(&mut self, offset: u64) -> Result<(), Error> {
        let header_length = self.get_header_length()?;

        self.inner
            .seek(SeekFrom::Start(u64::from(header_length) + offset))
            .map_err(Error::Seek)?;

        Ok(())
    }
}

impl<R> Reader<R>
where
    R: Read,
{
    /// Reads bytes of the data part.
    pub fn read_data_8(&mut self, buf: &mut [u8]) -> Result<(), Error> {
        self.inner.read_exact(buf).map_err(Error::Read)
    }

    /// Reads big-endian 16-bit items of the data part.
    pub fn read_data_16(&mut self, buf: &mut [u16]) -> Result<(), Error> {
        for n in buf {
            *n = read_u16_be(&mut self.inner).map_err(Error::Read)?;
        }

        Ok(())
    }

    /// Reads big-endian 32-bit items of the data part.
    pub fn read_data_32(&mut self, buf: &mut [u32]) -> Result<(), Error> {
        for n in buf {
            *n = read_u32_be(&mut self.inner).map_err(Error::Read)?;
        }

        Ok(())
    }
}

// Walks the group length chain: every group opens with a `(group, 0000)`
// field whose 4-byte body is the length of the rest of the group. The chain
// ends at the data group of any of the three record kinds.
pub(super) fn header_length<S>(stream: &mut S) -> Result<u32, Error>
where
    S: Read + Seek,
{
    let mut header_length = 0;

    loop {
        stream
            .seek(SeekFrom::Start(u64::from(header_length)))
            .map_err(Error::Seek)?;

        let group = read_u16_be(stream).map_err(Error::Read)?;
        let element = read_u16_be(stream).map_err(Error::Read)?;
        let len = read_u32_be(stream).map_err(Error::Read)?;
        let group_length = read_u32_be(stream).map_err(Error::Read)?;

        if element != 0 || len != 4 {
            return Err(Error::InvalidFormat);
        }

        match group {
            GROUP_PIXEL_DATA | GROUP_STRUCTURE_DATA | GROUP_DISPLAY_DATA => {
                // the terminal block is the group length field plus one
                // empty data field
                return Ok(header_length + 20);
            }
            _ => header_length += group_length + 12,
        }
    }
}
