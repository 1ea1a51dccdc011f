//! Pure rewriting of relative asset references into absolute URLs.

/// Path marker identifying relative asset references in rendered output.
pub const ASSET_MARKER: &str = "/assets/";

/// Replace every literal occurrence of [`ASSET_MARKER`] in `input` with `base_url`.
///
/// Matches are found left to right and consumed greedily without overlap, the
/// standard replace-all contract. The operation is total: it never fails, and
/// an empty `base_url` simply deletes the marker. Replacement is a raw
/// substring substitution with no awareness of URL or path structure, and the
/// inserted text is never rescanned, so a `base_url` that itself contains
/// `/assets/` produces output the function would rewrite again if reapplied.
/// Run it once per rendered document.
pub fn absolute_urls(input: &str, base_url: &str) -> String {
    input.replace(ASSET_MARKER, base_url)
}
