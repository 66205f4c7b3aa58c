//! Read-only access to tag values already decoded into the surrounding metadata tree.
//!
//! The decryption engine and the model-based selectors need a few sibling tags
//! (camera model, shutter count, serial number). They only see the tree through
//! [`TagLookup`], so any tree type, or a plain `HashMap` in tests, can serve.

use std::collections::HashMap;
use std::fmt;

use crate::group::IfdId;

/// Exif.Image.Model.
pub const TAG_MODEL: u16 = 0x0110;

/// A decoded tag value, as far as the makernote layer needs to understand it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagValue {
    /// ASCII string; anything from the first NUL on is ignored.
    Ascii(String),
    /// BYTE / UNDEFINED components.
    Bytes(Vec<u8>),
    Short(Vec<u16>),
    Long(Vec<u32>),
}

impl TagValue {
    /// Number of components.
    pub fn count(&self) -> usize {
        match self {
            TagValue::Ascii(s) => s.len(),
            TagValue::Bytes(v) => v.len(),
            TagValue::Short(v) => v.len(),
            TagValue::Long(v) => v.len(),
        }
    }

    /// Component `n` as an unsigned integer. ASCII values are parsed as a whole
    /// and only have component 0.
    pub fn to_u32(&self, n: usize) -> Option<u32> {
        match self {
            TagValue::Ascii(_) if n == 0 => parse_u32(&self.to_string()),
            TagValue::Ascii(_) => None,
            TagValue::Bytes(v) => v.get(n).map(|&b| b as u32),
            TagValue::Short(v) => v.get(n).map(|&s| s as u32),
            TagValue::Long(v) => v.get(n).copied(),
        }
    }
}

impl fmt::Display for TagValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn join<T: fmt::Display>(f: &mut fmt::Formatter<'_>, v: &[T]) -> fmt::Result {
            for (i, x) in v.iter().enumerate() {
                if i > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{x}")?;
            }
            Ok(())
        }
        match self {
            TagValue::Ascii(s) => f.write_str(s.split('\0').next().unwrap_or_default()),
            TagValue::Bytes(v) => join(f, v),
            TagValue::Short(v) => join(f, v),
            TagValue::Long(v) => join(f, v),
        }
    }
}

/// Parse an unsigned decimal integer, tolerating surrounding whitespace only.
pub fn parse_u32(s: &str) -> Option<u32> {
    s.trim().parse::<u32>().ok()
}

/// Lookup of a tag value by (tag, group) in an already-built metadata tree.
///
/// Implementations must tolerate any lookup failing; callers treat `None` as
/// "dependency missing" and back off.
pub trait TagLookup {
    fn value(&self, tag: u16, group: IfdId) -> Option<&TagValue>;
}

impl TagLookup for HashMap<(u16, IfdId), TagValue> {
    fn value(&self, tag: u16, group: IfdId) -> Option<&TagValue> {
        self.get(&(tag, group))
    }
}

impl<T: TagLookup + ?Sized> TagLookup for &T {
    fn value(&self, tag: u16, group: IfdId) -> Option<&TagValue> {
        (**self).value(tag, group)
    }
}

/// Camera model from Exif.Image.Model; empty if the tag is missing or empty.
pub fn exif_model(root: &dyn TagLookup) -> String {
    match root.value(TAG_MODEL, IfdId::Ifd0) {
        Some(v) if v.count() > 0 => v.to_string(),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_stops_at_nul() {
        let v = TagValue::Ascii("NIKON D50\0\0".to_string());
        assert_eq!(v.to_string(), "NIKON D50");
    }

    #[test]
    fn ascii_number_parses_with_padding() {
        let v = TagValue::Ascii(" 3012345\0".to_string());
        assert_eq!(v.to_u32(0), Some(3_012_345));
        assert_eq!(TagValue::Ascii("30A1".to_string()).to_u32(0), None);
    }

    #[test]
    fn model_missing_is_empty() {
        let root: HashMap<(u16, IfdId), TagValue> = HashMap::new();
        assert!(exif_model(&root).is_empty());
    }
}
