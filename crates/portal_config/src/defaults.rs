//! Fallback values used when a public runtime configuration key is missing or empty.

pub const DEFAULT_EGO_API_ROOT: &str = "http://localhost:8088";
pub const DEFAULT_EGO_CLIENT_ID: &str = "";
pub const DEFAULT_EGO_PUBLIC_KEY: &str = "-----BEGIN PUBLIC KEY-----\r\nMIIBIjANBgkqhkiG9w0BAQEFAAOCAQ8AMIIBCgKCAQEA0lOqMuPLCVusc6szklNXQL1FHhSkEgR7An+8BllBqTsRHM4bRYosseGFCbYPn8r8FsWuMDtxp0CwTyMQR2PCbJ740DdpbE1KC6jAfZxqcBete7gP0tooJtbvnA6X4vNpG4ukhtUoN9DzNOO0eqMU0Rgyy5HjERdYEWkwTNB30i9I+nHFOSj4MGLBSxNlnuo3keeomCRgtimCx+L/K3HNo0QHTG1J7RzLVAchfQT0lu3pUJ8kB+UM6/6NG+fVyysJyRZ9gadsr4gvHHckw8oUBp2tHvqBEkEdY+rt1Mf5jppt7JUV7HAPLB/qR5jhALY2FX/8MN+lPLmb/nLQQichVQIDAQAB\r\n-----END PUBLIC KEY-----";
pub const DEFAULT_ARRANGER_PROJECT_ID: &str = "";
pub const DEFAULT_ARRANGER_GRAPHQL_FIELD: &str = "";
pub const DEFAULT_ARRANGER_INDEX: &str = "";
pub const DEFAULT_ARRANGER_API: &str = "http://localhost:5050";
pub const DEFAULT_BASE_PATH: &str = "";
