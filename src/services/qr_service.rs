use std::io::Cursor;

use image::Luma;
use qrcode::{ EcLevel, QrCode };

use crate::error::{ AppError, Result };

/// Rendered size of one QR module, in pixels.
const MODULE_SIZE: u32 = 10;

/// Validate a user-supplied URL string. Only non-empty strings with an
/// explicit http/https scheme are accepted; nothing is generated otherwise.
pub fn validate_url(input: &str) -> Result<()> {
    if input.is_empty() {
        return Err(AppError::Validation("URL must not be empty".to_string()));
    }

    if !input.starts_with("http://") && !input.starts_with("https://") {
        return Err(
            AppError::Validation("URL must start with http:// or https://".to_string())
        );
    }

    Ok(())
}

/// Stateless QR generation: payload in, PNG bytes out.
pub struct QrService;

impl QrService {
    pub fn new() -> Self {
        Self
    }

    /// Encode a payload at error-correction level L. The symbol version is
    /// chosen automatically as the smallest that fits; payloads beyond the
    /// maximum QR capacity fail with an encoding error.
    pub fn encode(&self, payload: &str) -> Result<QrCode> {
        let code = QrCode::with_error_correction_level(payload, EcLevel::L)?;
        Ok(code)
    }

    /// Render a QR symbol as a PNG with black modules on a white background,
    /// 10 px per module and the standard 4-module quiet zone.
    pub fn render_png(&self, code: &QrCode) -> Result<Vec<u8>> {
        let image = code
            .render::<Luma<u8>>()
            .module_dimensions(MODULE_SIZE, MODULE_SIZE)
            .build();

        let mut buffer = Vec::new();
        image.write_to(&mut Cursor::new(&mut buffer), image::ImageFormat::Png)?;

        Ok(buffer)
    }

    pub fn generate_png(&self, payload: &str) -> Result<Vec<u8>> {
        let code = self.encode(payload)?;
        let png = self.render_png(&code)?;

        tracing::debug!("Generated {} byte PNG for {} byte payload", png.len(), payload.len());

        Ok(png)
    }
}

impl Default for QrService {
    fn default() -> Self {
        Self::new()
    }
}
