use lipgloss::Style;

/// Pads every line to `total_width` and clips or extends the block to exactly
/// `rows` lines, so a region always fills its slot of the screen.
pub fn normalize_and_pad(lines: Vec<String>, total_width: usize, rows: usize) -> String {
    let line_style = Style::new().width(total_width as i32);
    let blank = line_style.render("");
    let mut out: Vec<String> = lines
        .into_iter()
        .take(rows)
        .map(|l| line_style.render(&l))
        .collect();
    out.resize(rows, blank);
    out.join("\n")
}
