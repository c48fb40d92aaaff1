//! Console rendering of data responses.

pub mod esg;
pub mod news;
pub mod symbology;
pub mod table;

pub use esg::render_esg;
pub use news::render_news_headlines;
pub use symbology::render_symbology;
pub use table::TextTable;
