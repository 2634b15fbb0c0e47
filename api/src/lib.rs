pub mod contact;

// base url for the external backend, baked in at build time
//
// an empty value means same-origin relative requests, which is what a static
// bundle deployed behind the same proxy as its backend wants
pub fn backend_base_url() -> &'static str {
    option_env!("FOLIO_BACKEND_URL").unwrap_or("")
}
