//! Date and time pattern handling.
//!
//! The full date pattern is scanned once to carve out a month-day and a
//! year-month pattern. Field letters follow the usual conventions: `M`
//! month, `d` day (three or more is the weekday name), `y` year.

/// Patterns derived from a full date pattern.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DatePatternParts {
    pub month_day: Option<String>,
    pub year_month: Option<String>,
}

/// Field letters that end both runs without being copied.
fn is_breaking_field(c: char) -> bool {
    matches!(
        c,
        'h' | 'H' | 'm' | 's' | 'f' | 'F' | 't' | 'a' | 'z' | 'Z' | 'K' | 'g'
    )
}

/// One of the two runs being collected.
///
/// An ended run is resumed by its next field letter; text seen while it
/// was inactive is not copied.
#[derive(Default)]
struct Run {
    text: String,
    active: bool,
    started: bool,
}

impl Run {
    fn extend(&mut self, field: &str) {
        self.active = true;
        self.started = true;
        self.text.push_str(field);
    }

    fn append(&mut self, c: char) {
        if self.active {
            self.text.push(c);
        }
    }

    fn end(&mut self) {
        self.active = false;
    }

    fn finish(self) -> Option<String> {
        self.started.then(|| trim_pattern(&self.text).to_string())
    }
}

/// Derive month-day and year-month patterns from a full date pattern.
///
/// Quoted text is copied into whichever runs are active; an unquoted field
/// letter starts, extends or ends runs. A run that was never started is
/// left unset.
pub fn split_full_date_pattern(pattern: &str) -> DatePatternParts {
    let mut month_day = Run::default();
    let mut year_month = Run::default();
    let mut quoted = false;

    let chars: Vec<char> = pattern.chars().collect();
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        if c == '\'' {
            quoted = !quoted;
            month_day.append(c);
            year_month.append(c);
            i += 1;
            continue;
        }
        if quoted {
            month_day.append(c);
            year_month.append(c);
            i += 1;
            continue;
        }

        let len = chars[i..].iter().take_while(|&&next| next == c).count();
        let field: String = chars[i..i + len].iter().collect();
        match c {
            'M' => {
                month_day.extend(&field);
                year_month.extend(&field);
            }
            // `ddd` and `dddd` name the weekday.
            'd' if len >= 3 => {
                month_day.end();
                year_month.end();
            }
            'd' => {
                month_day.extend(&field);
                year_month.end();
            }
            'y' => {
                year_month.extend(&field);
                month_day.end();
            }
            c if is_breaking_field(c) => {
                month_day.end();
                year_month.end();
            }
            _ => {
                for c in field.chars() {
                    month_day.append(c);
                    year_month.append(c);
                }
            }
        }
        i += len;
    }

    DatePatternParts {
        month_day: month_day.finish(),
        year_month: year_month.finish(),
    }
}

/// Trailing connectives removed from derived patterns, longest first.
const CONNECTIVES: &[&str] = &["' del '", "' de '", "' di '", "' ta '", "'ren'"];

/// Strip whitespace, one trailing comma, and at most one trailing
/// connective phrase.
pub fn trim_pattern(pattern: &str) -> &str {
    let trimmed = pattern.trim();
    let trimmed = trimmed.strip_suffix(',').unwrap_or(trimmed).trim();
    CONNECTIVES
        .iter()
        .find_map(|connective| trimmed.strip_suffix(connective))
        .map_or(trimmed, str::trim_end)
}

/// Rewrite the unquoted am/pm field letter `a` to `t`.
pub fn convert_time_pattern(pattern: &str) -> String {
    let mut quoted = false;
    pattern
        .chars()
        .map(|c| match c {
            '\'' => {
                quoted = !quoted;
                c
            }
            'a' if !quoted => 't',
            c => c,
        })
        .collect()
}

/// Build the full date-time pattern from a `{1}`/`{0}` template.
///
/// `{1}` is the long date, `{0}` the long time. Without a template the two
/// are joined by a space.
pub fn compose_full_date_time(template: Option<&str>, long_date: &str, long_time: &str) -> String {
    match template {
        Some(template) => template.replace("{1}", long_date).replace("{0}", long_time),
        None => format!("{long_date} {long_time}"),
    }
}

#[cfg(test)]
mod tests;
