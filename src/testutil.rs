//! Hand-built JPEG fixtures for tests

pub const TAG_DATE_TIME: u16 = 0x0132;
pub const TAG_DATE_TIME_ORIGINAL: u16 = 0x9003;
pub const TAG_DATE_TIME_DIGITIZED: u16 = 0x9004;

const TAG_EXIF_IFD_POINTER: u16 = 0x8769;
const TYPE_ASCII: u16 = 2;
const TYPE_LONG: u16 = 4;

/// Minimal big-endian JPEG carrying only an APP1 EXIF segment.
///
/// `ifd0` holds TIFF-level ASCII tags (e.g. `DateTime`), `exif_ifd` holds
/// Exif sub-IFD ASCII tags (e.g. `DateTimeOriginal`).
pub fn jpeg_with_exif(ifd0: &[(u16, &str)], exif_ifd: &[(u16, &str)]) -> Vec<u8> {
    let tiff = build_tiff(ifd0, exif_ifd);

    let mut jpeg = vec![0xFF, 0xD8, 0xFF, 0xE1];
    let segment_len = (2 + 6 + tiff.len()) as u16;
    jpeg.extend_from_slice(&segment_len.to_be_bytes());
    jpeg.extend_from_slice(b"Exif\0\0");
    jpeg.extend_from_slice(&tiff);
    jpeg.extend_from_slice(&[0xFF, 0xD9]);
    jpeg
}

fn ifd_size(entries: usize) -> usize {
    2 + 12 * entries + 4
}

fn build_tiff(ifd0: &[(u16, &str)], exif_ifd: &[(u16, &str)]) -> Vec<u8> {
    let has_exif_ifd = !exif_ifd.is_empty();
    let ifd0_entries = ifd0.len() + usize::from(has_exif_ifd);
    let ifd0_offset = 8;
    let exif_offset = ifd0_offset + ifd_size(ifd0_entries);
    let mut data_offset = if has_exif_ifd {
        exif_offset + ifd_size(exif_ifd.len())
    } else {
        exif_offset
    };

    let mut data = Vec::new();
    let mut ascii_entry = |tag: u16, value: &str, out: &mut Vec<u8>| {
        let mut bytes = value.as_bytes().to_vec();
        bytes.push(0);
        out.extend_from_slice(&tag.to_be_bytes());
        out.extend_from_slice(&TYPE_ASCII.to_be_bytes());
        out.extend_from_slice(&(bytes.len() as u32).to_be_bytes());
        if bytes.len() <= 4 {
            bytes.resize(4, 0);
            out.extend_from_slice(&bytes);
        } else {
            out.extend_from_slice(&(data_offset as u32).to_be_bytes());
            if bytes.len() % 2 == 1 {
                bytes.push(0);
            }
            data_offset += bytes.len();
            data.extend_from_slice(&bytes);
        }
    };

    let mut tiff = Vec::new();
    tiff.extend_from_slice(b"MM");
    tiff.extend_from_slice(&42u16.to_be_bytes());
    tiff.extend_from_slice(&(ifd0_offset as u32).to_be_bytes());

    tiff.extend_from_slice(&(ifd0_entries as u16).to_be_bytes());
    for (tag, value) in ifd0 {
        ascii_entry(*tag, value, &mut tiff);
    }
    if has_exif_ifd {
        tiff.extend_from_slice(&TAG_EXIF_IFD_POINTER.to_be_bytes());
        tiff.extend_from_slice(&TYPE_LONG.to_be_bytes());
        tiff.extend_from_slice(&1u32.to_be_bytes());
        tiff.extend_from_slice(&(exif_offset as u32).to_be_bytes());
    }
    tiff.extend_from_slice(&0u32.to_be_bytes());

    if has_exif_ifd {
        tiff.extend_from_slice(&(exif_ifd.len() as u16).to_be_bytes());
        for (tag, value) in exif_ifd {
            ascii_entry(*tag, value, &mut tiff);
        }
        tiff.extend_from_slice(&0u32.to_be_bytes());
    }

    tiff.extend_from_slice(&data);
    tiff
}

/// JPEG whose `DateTimeOriginal` is `date`
pub fn jpeg_taken_at(date: &str) -> Vec<u8> {
    jpeg_with_exif(&[], &[(TAG_DATE_TIME_ORIGINAL, date)])
}
