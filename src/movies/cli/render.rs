use super::styles::{AXIS, BAR, HIGHLIGHT};
use colored::Colorize;
use movies::api::{CmdMessage, MessageLevel, RatingStats};
use movies::chart::Histogram;
use movies::fuzzy::FuzzyMatch;
use movies::model::{format_rating, Movie};
use std::io::{self, Write};
use unicode_width::UnicodeWidthStr;

const BAR_WIDTH: usize = 40;
const BAR_CHAR: char = '█';

pub(super) fn print_messages(out: &mut dyn Write, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        match message.level {
            MessageLevel::Info => writeln!(out, "{}", message.content.dimmed())?,
            MessageLevel::Success => writeln!(out, "{}", message.content.green())?,
            MessageLevel::Warning => writeln!(out, "{}", message.content.magenta())?,
            MessageLevel::Error => writeln!(out, "{}", message.content.red())?,
        }
    }
    Ok(())
}

pub(super) fn print_movies(out: &mut dyn Write, movies: &[Movie]) -> io::Result<()> {
    for movie in movies {
        writeln!(out, "{}", movie)?;
    }
    Ok(())
}

pub(super) fn print_search_hits(out: &mut dyn Write, movies: &[Movie]) -> io::Result<()> {
    for movie in movies {
        writeln!(out, "{}, {}", movie.title, format_rating(movie.rating))?;
    }
    Ok(())
}

/// One suggested title per line, under the "Did you mean:" search message.
pub(super) fn print_suggestions(out: &mut dyn Write, suggestions: &[FuzzyMatch]) -> io::Result<()> {
    for suggestion in suggestions {
        writeln!(out, "{}", suggestion.title)?;
    }
    Ok(())
}

pub(super) fn print_stats(out: &mut dyn Write, stats: &RatingStats) -> io::Result<()> {
    writeln!(out, "Average rating: {:.2}", stats.mean)?;
    writeln!(out, "Median rating: {}", format_rating(stats.median))?;
    writeln!(
        out,
        "Best movie: {}, {}",
        stats.best.title,
        format_rating(stats.best.rating)
    )?;
    writeln!(
        out,
        "Worst movie: {}, {}",
        stats.worst.title,
        format_rating(stats.worst.rating)
    )
}

pub(super) fn print_random_pick(out: &mut dyn Write, movie: &Movie) -> io::Result<()> {
    writeln!(
        out,
        "Your movie for tonight: {}, it's rated {}",
        HIGHLIGHT.apply_to(&movie.title),
        HIGHLIGHT.apply_to(format_rating(movie.rating))
    )
}

/// Text rendering of the histogram, one row per bin:
/// `<range> │<bar> <count>`, ranges right-aligned to the widest label.
pub(super) fn histogram_lines(histogram: &Histogram) -> Vec<String> {
    let labels: Vec<String> = histogram
        .bins
        .iter()
        .map(|b| format!("{:.2} - {:.2}", b.start, b.end))
        .collect();
    let label_width = labels.iter().map(|l| l.width()).max().unwrap_or(0);
    let max_count = histogram.max_count().max(1);

    histogram
        .bins
        .iter()
        .zip(labels)
        .map(|(bin, label)| {
            let mut len = bin.count * BAR_WIDTH / max_count;
            if bin.count > 0 && len == 0 {
                len = 1;
            }
            let bar: String = std::iter::repeat(BAR_CHAR).take(len).collect();
            let pad = " ".repeat(label_width - label.width());
            format!(
                "{}{} {}{} {}",
                pad,
                label,
                AXIS.apply_to('│'),
                BAR.apply_to(bar),
                bin.count
            )
        })
        .collect()
}

pub(super) fn print_histogram(out: &mut dyn Write, histogram: &Histogram) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "Movies Ratings".bold())?;
    writeln!(out, "{}", AXIS.apply_to("Rate → Movies"))?;
    for line in histogram_lines(histogram) {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use movies::chart::Bin;

    fn render<F: FnOnce(&mut dyn Write) -> io::Result<()>>(f: F) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn movies_render_as_title_year_rating() {
        let out = render(|o| {
            print_movies(
                o,
                &[Movie::new("Alien", 1979, 8.5), Movie::new("Heat", 1995, 8.0)],
            )
        });
        assert_eq!(out, "Alien (1979): 8.5\nHeat (1995): 8.0\n");
    }

    #[test]
    fn search_hits_render_title_and_rating() {
        let out = render(|o| print_search_hits(o, &[Movie::new("Batman", 1989, 7.5)]));
        assert_eq!(out, "Batman, 7.5\n");
    }

    #[test]
    fn stats_render() {
        let stats = RatingStats {
            count: 3,
            mean: 7.0,
            median: 7.0,
            best: Movie::new("High", 2002, 9.0),
            worst: Movie::new("Low", 2001, 5.0),
        };
        let out = render(|o| print_stats(o, &stats));
        assert_eq!(
            out,
            "Average rating: 7.00\nMedian rating: 7.0\nBest movie: High, 9.0\nWorst movie: Low, 5.0\n"
        );
    }

    #[test]
    fn suggestions_render_one_title_per_line() {
        let suggestions = [
            FuzzyMatch {
                title: "Batman".into(),
                score: 83,
            },
            FuzzyMatch {
                title: "Batman Returns".into(),
                score: 70,
            },
        ];
        assert_eq!(
            render(|o| print_suggestions(o, &suggestions)),
            "Batman\nBatman Returns\n"
        );
    }

    #[test]
    fn no_suggestions_prints_nothing() {
        assert_eq!(render(|o| print_suggestions(o, &[])), "");
    }

    #[test]
    fn histogram_rows_scale_to_largest_bin() {
        let histogram = Histogram {
            bins: vec![
                Bin {
                    start: 5.0,
                    end: 7.5,
                    count: 4,
                },
                Bin {
                    start: 7.5,
                    end: 10.0,
                    count: 1,
                },
                Bin {
                    start: 10.0,
                    end: 12.5,
                    count: 0,
                },
            ],
        };
        let lines = histogram_lines(&histogram);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].matches(BAR_CHAR).count(), BAR_WIDTH);
        assert_eq!(lines[1].matches(BAR_CHAR).count(), BAR_WIDTH / 4);
        assert_eq!(lines[2].matches(BAR_CHAR).count(), 0);
        assert!(lines[0].starts_with("  5.00 - 7.50"));
        assert!(lines[2].starts_with("10.00 - 12.50"));
        assert!(lines[0].ends_with(" 4"));
    }
}
