//! Size tables and summaries for `heft top`.

use console::Term;
use heft_graph::{GraphStatistics, SizedModule, format_size};
use owo_colors::{OwoColorize, Stream::Stdout};

const SIZE_COLUMN: usize = 9;
const MIN_NAME_COLUMN: usize = 20;
const MAX_WIDTH: usize = 120;

/// Render modules as a table of total, own and dependency sizes.
///
/// Names longer than the available width are shortened from the left so the
/// file name stays visible.
pub fn size_table(modules: &[SizedModule], width: usize) -> String {
    let name_width = width
        .min(MAX_WIDTH)
        .saturating_sub(3 * (SIZE_COLUMN + 2))
        .max(MIN_NAME_COLUMN);

    let mut out = format!(
        "{:>w$}  {:>w$}  {:>w$}  {}\n",
        "TOTAL",
        "OWN",
        "DEPS",
        "MODULE",
        w = SIZE_COLUMN
    );
    for module in modules {
        out.push_str(&format!(
            "{:>w$}  {:>w$}  {:>w$}  {}\n",
            format_size(module.total_size),
            format_size(module.own_size),
            format_size(module.dependency_size()),
            shorten(&module.name, name_width),
            w = SIZE_COLUMN
        ));
    }
    out
}

/// Print [`size_table`] to stdout, sized to the terminal.
pub fn print_size_table(modules: &[SizedModule]) {
    let width = Term::stdout().size().1 as usize;
    let table = size_table(modules, width);
    let (header, rows) = table.split_once('\n').unwrap_or((table.as_str(), ""));

    println!("{}", header.if_supports_color(Stdout, |h| h.bold()));
    print!("{}", rows);
}

/// Print the statistics summary for one threshold to stdout.
pub fn print_statistics(statistics: &GraphStatistics, min_size: u64) {
    println!();
    println!(
        "{} modules, {} entries, {} edges, {} own bytes in total",
        statistics.module_count,
        statistics.entry_count,
        statistics.edge_count,
        format_size(statistics.total_own_size)
    );
    println!(
        "{} modules above {} ({:.1}%)",
        statistics.included_count,
        format_size(min_size),
        statistics.included_ratio() * 100.0
    );
    if statistics.has_cycles() {
        println!(
            "{} modules sit on reason cycles",
            statistics.cyclic_module_count
        );
    }
}

fn shorten(name: &str, width: usize) -> String {
    let count = name.chars().count();
    if count <= width {
        return name.to_string();
    }
    let keep = width.saturating_sub(1);
    let tail: String = name.chars().skip(count - keep).collect();
    format!("…{}", tail)
}
