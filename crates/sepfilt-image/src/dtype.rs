/// Trait for the scalar sample types an [`crate::Image`] can hold.
///
/// Filtering accumulates in `f64`, which holds every `u8`, `i16`, `i32`, `f32` and `f64`
/// sample exactly. The conversion back to the sample type uses Rust `as` semantics:
/// the value is truncated toward zero, saturated at the type bounds, and NaN becomes
/// zero. No rounding is applied.
pub trait ImageDtype: Copy + Default + PartialEq + Send + Sync + 'static {
    /// Short name of the sample type, e.g. `"u8"`.
    const NAME: &'static str;

    /// Convert the sample to f64.
    fn to_f64(self) -> f64;

    /// Convert a f64 value to the sample type.
    fn from_f64(val: f64) -> Self;
}

macro_rules! impl_image_dtype {
    ($($ty:ty => $name:literal),* $(,)?) => {
        $(
            impl ImageDtype for $ty {
                const NAME: &'static str = $name;

                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn from_f64(val: f64) -> Self {
                    val as $ty
                }
            }
        )*
    };
}

impl_image_dtype!(
    u8 => "u8",
    i16 => "i16",
    i32 => "i32",
    f32 => "f32",
    f64 => "f64",
);
