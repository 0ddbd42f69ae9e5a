#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Uppercased initials for the avatar badge: the first letter of each name.
pub fn initials(first_name: &str, last_name: &str) -> String {
    first_name
        .chars()
        .next()
        .into_iter()
        .chain(last_name.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Lowercase `h:mm am/pm` display for a row's creation time, from local
/// hours and minutes.
pub fn short_time(hours: u32, minutes: u32) -> String {
    let meridiem = if hours < 12 { "am" } else { "pm" };
    let hour = match hours % 12 {
        0 => 12,
        h => h,
    };
    format!("{hour}:{minutes:02} {meridiem}")
}
