//! System font lookup for coordinate labels.
//!
//! Grid labels use whatever sans-serif font the host system provides,
//! located through `fontdb` and rasterized with `rusttype`. Nothing is
//! bundled; on a system with no fonts at all, label drawing degrades to a
//! no-op with a single warning.

use std::sync::OnceLock;

use fontdb::{Database, Family, Query, Source};
use rusttype::Font;
use tracing::{debug, warn};

/// Pixel size used for grid coordinate labels.
pub(crate) const LABEL_SIZE: f32 = 11.0;

static LABEL_FONT: OnceLock<Option<Font<'static>>> = OnceLock::new();

/// The font used for grid labels, loaded once per process.
pub(crate) fn label_font() -> Option<&'static Font<'static>> {
    LABEL_FONT
        .get_or_init(|| {
            let font = load_system_font();
            if font.is_none() {
                warn!("No usable system font found; grid coordinate labels will be skipped");
            }
            font
        })
        .as_ref()
}

fn load_system_font() -> Option<Font<'static>> {
    let mut db = Database::new();
    db.load_system_fonts();

    let query = Query {
        families: &[Family::SansSerif],
        ..Query::default()
    };
    let id = db
        .query(&query)
        .or_else(|| db.faces().next().map(|face| face.id))?;
    let (source, index) = db.face_source(id)?;

    let bytes = match source {
        Source::File(path) => {
            debug!(path = %path.display(), "Loading label font");
            std::fs::read(&path).ok()?
        }
        Source::Binary(data) | Source::SharedFile(_, data) => data.as_ref().as_ref().to_vec(),
    };
    Font::try_from_vec_and_index(bytes, index)
}
