use std::str::FromStr;

use pixfx_image::{Color, ImageError, PixelBuffer};

use crate::{color, edges, error::FilterError, flip, pixelate};

/// A filter evaluated at a single output coordinate.
///
/// The function reads from the source buffer only, so the output pixels can be
/// produced in any order or in parallel.
pub type FilterFn = fn(&PixelBuffer, usize, usize) -> Result<Color, ImageError>;

/// The closed set of filters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FilterKind {
    /// Threshold the channel mean to black or white.
    BlackWhite,
    /// Replace every channel by the channel mean.
    Grayscale,
    /// Quantize channels to four levels.
    Posterize,
    /// Shift the red channel towards the middle.
    Tint,
    /// Rotate channels `(r, g, b) -> (g, b, r)`.
    ColorShiftRight,
    /// Rotate channels `(r, g, b) -> (b, r, g)`.
    ColorShiftLeft,
    /// Flip horizontally.
    Mirror,
    /// Resample in square blocks.
    Pixelate,
    /// Mark edges in black on white.
    ShowBorders,
    /// Invert every channel.
    Negative,
}

impl FilterKind {
    /// Every filter, in menu order.
    pub const ALL: [FilterKind; 10] = [
        FilterKind::BlackWhite,
        FilterKind::Grayscale,
        FilterKind::Posterize,
        FilterKind::Tint,
        FilterKind::ColorShiftRight,
        FilterKind::ColorShiftLeft,
        FilterKind::Mirror,
        FilterKind::Pixelate,
        FilterKind::ShowBorders,
        FilterKind::Negative,
    ];

    /// The identifier used to select the filter by name.
    pub const fn name(self) -> &'static str {
        match self {
            FilterKind::BlackWhite => "BlackWhite",
            FilterKind::Grayscale => "Grayscale",
            FilterKind::Posterize => "Posterize",
            FilterKind::Tint => "Tint",
            FilterKind::ColorShiftRight => "ColorShiftRight",
            FilterKind::ColorShiftLeft => "ColorShiftLeft",
            FilterKind::Mirror => "Mirror",
            FilterKind::Pixelate => "Pixelate",
            FilterKind::ShowBorders => "ShowBorders",
            FilterKind::Negative => "Negative",
        }
    }

    /// The human readable label shown in menus.
    pub const fn label(self) -> &'static str {
        match self {
            FilterKind::BlackWhite => "Black-White",
            FilterKind::Grayscale => "Grayscale",
            FilterKind::Posterize => "Posterize",
            FilterKind::Tint => "Tint",
            FilterKind::ColorShiftRight => "Color Shift Right",
            FilterKind::ColorShiftLeft => "Color Shift Left",
            FilterKind::Mirror => "Mirror",
            FilterKind::Pixelate => "Pixelate",
            FilterKind::ShowBorders => "Show Borders",
            FilterKind::Negative => "Negative",
        }
    }

    /// Resolve a menu label, see [`FilterKind::label`].
    pub fn from_label(label: &str) -> Result<Self, FilterError> {
        FilterKind::ALL
            .into_iter()
            .find(|kind| kind.label() == label)
            .ok_or_else(|| FilterError::UnknownFilter(label.to_string()))
    }

    /// The pixel function of the filter.
    pub const fn func(self) -> FilterFn {
        match self {
            FilterKind::BlackWhite => color::black_white,
            FilterKind::Grayscale => color::grayscale,
            FilterKind::Posterize => color::posterize,
            FilterKind::Tint => color::tint,
            FilterKind::ColorShiftRight => color::color_shift_right,
            FilterKind::ColorShiftLeft => color::color_shift_left,
            FilterKind::Mirror => flip::mirror,
            FilterKind::Pixelate => pixelate::pixelate,
            FilterKind::ShowBorders => edges::show_borders,
            FilterKind::Negative => color::negative,
        }
    }
}

impl FromStr for FilterKind {
    type Err = FilterError;

    /// Parse a filter identifier. The match is exact and case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FilterKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| FilterError::UnknownFilter(s.to_string()))
    }
}

impl std::fmt::Display for FilterKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A named filter function.
#[derive(Clone, Copy)]
pub struct FilterSpec {
    /// Which filter this is.
    pub kind: FilterKind,
    /// The function evaluated at every output coordinate.
    pub func: FilterFn,
}

impl FilterSpec {
    /// Build the spec of a filter kind.
    pub const fn new(kind: FilterKind) -> Self {
        Self {
            kind,
            func: kind.func(),
        }
    }

    /// The identifier of the filter.
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    /// Evaluate the filter at `(x, y)`.
    pub fn eval(&self, src: &PixelBuffer, x: usize, y: usize) -> Result<Color, ImageError> {
        (self.func)(src, x, y)
    }
}

impl std::fmt::Debug for FilterSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("FilterSpec").field("kind", &self.kind).finish()
    }
}

/// Maps filter names to their functions.
#[derive(Debug)]
pub struct FilterRegistry {
    specs: [FilterSpec; 10],
}

static GLOBAL_REGISTRY: FilterRegistry = FilterRegistry {
    specs: [
        FilterSpec::new(FilterKind::BlackWhite),
        FilterSpec::new(FilterKind::Grayscale),
        FilterSpec::new(FilterKind::Posterize),
        FilterSpec::new(FilterKind::Tint),
        FilterSpec::new(FilterKind::ColorShiftRight),
        FilterSpec::new(FilterKind::ColorShiftLeft),
        FilterSpec::new(FilterKind::Mirror),
        FilterSpec::new(FilterKind::Pixelate),
        FilterSpec::new(FilterKind::ShowBorders),
        FilterSpec::new(FilterKind::Negative),
    ],
};

impl FilterRegistry {
    /// The process-wide registry of the built-in filters.
    pub fn global() -> &'static FilterRegistry {
        &GLOBAL_REGISTRY
    }

    /// Find a filter by its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::UnknownFilter`] if no filter has this exact name.
    ///
    /// # Example
    ///
    /// ```
    /// use pixfx_imgproc::{FilterKind, FilterRegistry};
    ///
    /// let spec = FilterRegistry::global().lookup("Negative").unwrap();
    /// assert_eq!(spec.kind, FilterKind::Negative);
    ///
    /// assert!(FilterRegistry::global().lookup("negative").is_err());
    /// ```
    pub fn lookup(&self, name: &str) -> Result<&FilterSpec, FilterError> {
        self.specs
            .iter()
            .find(|spec| spec.name() == name)
            .ok_or_else(|| FilterError::UnknownFilter(name.to_string()))
    }

    /// The spec of a filter kind.
    pub fn get(&self, kind: FilterKind) -> &FilterSpec {
        // specs are stored in `FilterKind::ALL` order
        &self.specs[kind as usize]
    }

    /// Iterate over all registered filters.
    pub fn iter(&self) -> impl Iterator<Item = &FilterSpec> {
        self.specs.iter()
    }

    /// The identifiers of all registered filters.
    pub fn names(&self) -> Vec<&'static str> {
        self.specs.iter().map(FilterSpec::name).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{FilterKind, FilterRegistry};
    use crate::FilterError;

    #[test]
    fn test_lookup_all() -> Result<(), FilterError> {
        let registry = FilterRegistry::global();
        for kind in FilterKind::ALL {
            assert_eq!(registry.lookup(kind.name())?.kind, kind);
            assert_eq!(registry.get(kind).kind, kind);
        }
        assert_eq!(registry.iter().count(), 10);
        Ok(())
    }

    #[test]
    fn test_lookup_unknown() {
        let registry = FilterRegistry::global();
        for name in ["", "Sepia", "grayscale", "Black-White", " Mirror"] {
            assert_eq!(
                registry.lookup(name).err(),
                Some(FilterError::UnknownFilter(name.to_string()))
            );
        }
    }

    #[test]
    fn test_names() {
        assert_eq!(
            FilterRegistry::global().names(),
            vec![
                "BlackWhite",
                "Grayscale",
                "Posterize",
                "Tint",
                "ColorShiftRight",
                "ColorShiftLeft",
                "Mirror",
                "Pixelate",
                "ShowBorders",
                "Negative",
            ]
        );
    }

    #[test]
    fn test_kind_parse_and_label() -> Result<(), FilterError> {
        assert_eq!("ShowBorders".parse::<FilterKind>()?, FilterKind::ShowBorders);
        assert_eq!(FilterKind::from_label("Color Shift Left")?, FilterKind::ColorShiftLeft);
        assert!(FilterKind::from_label("ColorShiftLeft").is_err());
        assert_eq!(FilterKind::Tint.to_string(), "Tint");
        Ok(())
    }
}
