//! File download module
//!
//! Shapes a binary-mode response into a file name and payload. Images,
//! archives, office documents and PDFs come back base64 encoded; every other
//! content type comes back as raw bytes.

mod classifier;

pub use classifier::{
    classify, classify_payload, file_name_from_disposition, file_name_from_uri,
    is_encoded_content_type, FileDownload, FilePayload, ENCODED_CONTENT_TYPES,
    FALLBACK_FILE_NAME,
};
