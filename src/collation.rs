use std::cmp::Ordering;

/// Compare two display strings the way the browser's default locale orders them
///
/// In the browser this defers to `String.prototype.localeCompare`. Native
/// builds have no `Intl` runtime and fall back to code point order, which
/// already agrees with dictionary order for Hangul syllables.
#[cfg(target_arch = "wasm32")]
#[must_use]
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    let result = js_sys::JsString::from(a).locale_compare(b, &js_sys::Array::new(), &js_sys::Object::new());
    result.cmp(&0)
}

#[cfg(not(target_arch = "wasm32"))]
#[must_use]
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    a.cmp(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hangul_dictionary_order() {
        assert_eq!(locale_cmp("강남", "서울역"), Ordering::Less);
        assert_eq!(locale_cmp("홍대입구", "시청"), Ordering::Greater);
    }

    #[test]
    fn test_equal_strings() {
        assert_eq!(locale_cmp("시청", "시청"), Ordering::Equal);
    }

    #[test]
    fn test_prefix_sorts_first() {
        assert_eq!(locale_cmp("서울", "서울역"), Ordering::Less);
    }
}
