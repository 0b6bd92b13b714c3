mod failed;
mod loading;

pub(crate) use failed::render_fetch_failed;
pub(crate) use loading::render_loading;
