/// Whether a stored value carries meaningful content.
///
/// Upstream records use blank strings and the literals `none` / `null` to
/// mean "no value", so those are treated exactly like a missing value.
/// Non-string scalars are always present, including `0` and `false`.
pub trait Present {
    fn is_present(&self) -> bool;
}

pub fn is_present<T: Present + ?Sized>(value: &T) -> bool {
    value.is_present()
}

impl Present for str {
    fn is_present(&self) -> bool {
        let trimmed = self.trim();
        !trimmed.is_empty()
            && !trimmed.eq_ignore_ascii_case("none")
            && !trimmed.eq_ignore_ascii_case("null")
    }
}

impl Present for String {
    fn is_present(&self) -> bool {
        self.as_str().is_present()
    }
}

impl<T: Present + ?Sized> Present for &T {
    fn is_present(&self) -> bool {
        (**self).is_present()
    }
}

impl<T: Present> Present for Option<T> {
    fn is_present(&self) -> bool {
        self.as_ref().is_some_and(Present::is_present)
    }
}

impl Present for secrecy::SecretString {
    fn is_present(&self) -> bool {
        use secrecy::ExposeSecret;
        self.expose_secret().is_present()
    }
}

impl Present for serde_json::Value {
    fn is_present(&self) -> bool {
        match self {
            serde_json::Value::Null => false,
            serde_json::Value::String(s) => s.is_present(),
            _ => true,
        }
    }
}

macro_rules! always_present {
    ($($t:ty),*) => {
        $(
            impl Present for $t {
                fn is_present(&self) -> bool {
                    true
                }
            }
        )*
    };
}

always_present!(bool, i8, i16, i32, i64, u8, u16, u32, u64, usize, isize, f32, f64);
