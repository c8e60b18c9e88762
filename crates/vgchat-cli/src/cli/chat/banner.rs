//! Welcome panel and empty-conversation greeting.
//!
//! The vendor panel is printed once when a session starts; the greeting and
//! suggested questions are printed whenever the conversation is empty.

use console::style;

use vgchat_core::chat::suggestions::Suggestions;

/// Vendor facts shown in the welcome panel: (icon, label, value).
const VENDOR_FACTS: &[(&str, &str, &str)] = &[
    ("📅", "Thành lập", "03/2020"),
    ("🏆", "Chứng nhận", "ISO 27001"),
    ("🚀", "Sản phẩm", "VietGuard, AI SOC, SmartDashboard, CSA"),
];

/// Topics the assistant advertises in its greeting.
const TOPICS: &[(&str, &str)] = &[
    ("🛡️", "VietGuard"),
    ("🤖", "AI SOC"),
    ("🔒", "Bảo mật"),
    ("📊", "Giải pháp"),
];

/// Print the welcome panel at the start of a chat session.
pub fn print_welcome_banner(endpoint: &str) {
    println!();
    println!(
        "  🛡️  {}  {}",
        style("Trợ lý Ảo An Ninh Mạng ICS").cyan().bold(),
        style("● Online").green()
    );
    println!("  {}", style("ICS Security · AI Chatbot").dim());
    println!();
    for (icon, label, value) in VENDOR_FACTS {
        println!("  {icon} {} {value}", style(format!("{label:<11}")).bold());
    }
    println!("  🌐 {}", style("icss.com.vn").underlined());
    println!();
    println!("  {}  {}", style("Backend:").bold(), style(endpoint).dim());
    println!();
    println!(
        "  {}",
        style("Type /help for commands, Ctrl+D to exit").dim()
    );
    println!("  {}", style("---").dim());
    println!();
}

/// Print the greeting and the suggested questions.
pub fn print_greeting(suggestions: &Suggestions) {
    println!("  🤖 {}", style("Xin chào! 👋").bold());
    println!(
        "  Tôi là trợ lý AI 'Loan Yêu Thương' của ICS Security. Tôi có thể giúp bạn tìm hiểu về:"
    );
    let topics: Vec<String> = TOPICS
        .iter()
        .map(|(icon, topic)| format!("{icon} {topic}"))
        .collect();
    println!("  {}", topics.join("   "));
    println!();
    print_suggestions(suggestions);
}

/// Print the numbered suggested questions.
pub fn print_suggestions(suggestions: &Suggestions) {
    if suggestions.is_empty() {
        return;
    }
    println!("  {}", style("Câu hỏi gợi ý:").bold());
    for (n, question) in suggestions.numbered() {
        println!("  {} 💡 {}", style(format!("{n}.")).cyan(), question);
    }
    println!(
        "  {}",
        style("Send one with /ask <n>").dim()
    );
    println!();
}
