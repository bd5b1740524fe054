use colored::Colorize;

pub fn display_success(message: &str) {
    println!("{} {}", "Success:".green().bold(), message);
}

pub fn display_error(message: &str) {
    eprintln!("{} {}", "Error:".red().bold(), message);
}

pub fn display_info(message: &str) {
    println!("{} {}", "Info:".blue().bold(), message);
}
