/// Check whether the value can be carried as a single-line header value
pub(crate) fn is_single_line(value: &str) -> bool {
  !value.chars().any(|c| c.is_ascii_control())
}

/// Check that the value is a non-empty http token, i.e., `1*tchar` of RFC 9110
pub(crate) fn is_token(value: &str) -> bool {
  !value.is_empty()
    && value
      .bytes()
      .all(|b| b.is_ascii_alphanumeric() || b"!#$%&'*+-.^_`|~".contains(&b))
}
