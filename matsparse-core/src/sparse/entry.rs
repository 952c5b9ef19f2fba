//! Stored value at an occupied coordinate

/// Components assigned at one coordinate
///
/// A coordinate becomes occupied through either setter, so an entry may
/// carry only one of its two parts. The missing part reads as `0.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Entry {
    Real(f64),
    Imaginary(f64),
    Complex { re: f64, im: f64 },
}

impl Entry {
    pub fn real(&self) -> f64 {
        match *self {
            Entry::Real(re) | Entry::Complex { re, .. } => re,
            Entry::Imaginary(_) => 0.0,
        }
    }

    pub fn imaginary(&self) -> f64 {
        match *self {
            Entry::Imaginary(im) | Entry::Complex { im, .. } => im,
            Entry::Real(_) => 0.0,
        }
    }

    /// Replace the real part, keeping any imaginary part
    pub fn with_real(self, re: f64) -> Self {
        match self {
            Entry::Real(_) => Entry::Real(re),
            Entry::Imaginary(im) | Entry::Complex { im, .. } => Entry::Complex { re, im },
        }
    }

    /// Replace the imaginary part, keeping any real part
    pub fn with_imaginary(self, im: f64) -> Self {
        match self {
            Entry::Imaginary(_) => Entry::Imaginary(im),
            Entry::Real(re) | Entry::Complex { re, .. } => Entry::Complex { re, im },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_component_reads_zero() {
        assert_eq!(Entry::Real(3.0).imaginary(), 0.0);
        assert_eq!(Entry::Imaginary(4.0).real(), 0.0);
        assert_eq!(Entry::Real(3.0).real(), 3.0);
        assert_eq!(Entry::Imaginary(4.0).imaginary(), 4.0);
    }

    #[test]
    fn test_updates_keep_other_component() {
        let entry = Entry::Imaginary(2.0).with_real(1.0);
        assert_eq!(entry, Entry::Complex { re: 1.0, im: 2.0 });

        let entry = entry.with_real(5.0);
        assert_eq!(entry, Entry::Complex { re: 5.0, im: 2.0 });

        let entry = Entry::Real(1.0).with_imaginary(-1.0);
        assert_eq!(entry, Entry::Complex { re: 1.0, im: -1.0 });

        assert_eq!(Entry::Real(1.0).with_real(2.0), Entry::Real(2.0));
    }
}
