use anilist::anime::Genre;
use anilist::api::{CmdMessage, MessageLevel};
use anilist::index::DisplayAnime;
use colored::Colorize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const MAX_NAME_WIDTH: usize = 40;
const EPISODE_WIDTH: usize = 5;
const STATUS_WIDTH: usize = 8;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

pub(super) fn print_animes(animes: &[DisplayAnime]) {
    print!("{}", render_anime_list(animes));
}

/// One aligned line per anime: index, name, episode, status, genres.
pub(super) fn render_anime_list(animes: &[DisplayAnime]) -> String {
    if animes.is_empty() {
        return "No anime found.\n".to_string();
    }

    let index_width = animes
        .iter()
        .map(|da| da.index.one_based().to_string().len())
        .max()
        .unwrap_or(1);
    let name_width = animes
        .iter()
        .map(|da| da.anime.name().as_str().width())
        .max()
        .unwrap_or(0)
        .min(MAX_NAME_WIDTH);

    let mut output = String::new();
    for da in animes {
        let index = format!("{:>width$}.", da.index.one_based(), width = index_width);
        let name = truncate_to_width(da.anime.name().as_str(), name_width);
        let padding = name_width.saturating_sub(name.width());
        let genres: String = da
            .anime
            .genres()
            .iter()
            .map(Genre::as_str)
            .collect::<Vec<_>>()
            .join(", ");

        let line = format!(
            "{} {}{}  {:>ep$}  {:<st$}  {}",
            index.yellow(),
            name.bold(),
            " ".repeat(padding),
            da.anime.episode().count(),
            da.anime.status().as_str(),
            genres.dimmed(),
            ep = EPISODE_WIDTH,
            st = STATUS_WIDTH,
        );
        output.push_str(line.trim_end());
        output.push('\n');
    }
    output
}

pub(super) fn render_text_list(lines: &[String], empty_message: &str) -> String {
    if lines.is_empty() {
        return format!("{}\n", empty_message);
    }
    let mut output = lines.join("\n");
    output.push('\n');
    output
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}
