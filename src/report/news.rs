use crate::data::news::NewsHeadlinesResponse;
use crate::report::table::TextTable;

pub const NO_NEWS: &str = "No news data for this query";

pub fn render_news_headlines(response: &NewsHeadlinesResponse) -> String {
    if response.data.is_empty() {
        return NO_NEWS.to_string();
    }

    let mut table = TextTable::new(["storyId", "title", "versionCreated"]);
    for headline in &response.data {
        table.push_row([headline.story_id.as_str(), headline.title(), headline.version_created()]);
    }
    table.render()
}
