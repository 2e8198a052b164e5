use crate::core::budget::{BudgetContext, BudgetStatus};
use crate::core::models::series::ServiceSeries;
use crate::core::trend::{delta_percent, sparkline};

/// Render the ranked services plus the "Other" and "Total" rows as a
/// fixed-width table.
///
/// ```text
/// Service    $Yday        ∆% Last 7d
/// Amazon EC2 $  103.50    2% ▃▃▄▄▅▆▇
/// Other      $   12.04    0% ▁▂▁▁▂▁▂
/// Total      $  115.54    2% ▃▃▄▄▅▆▇
/// ```
pub fn render_table(top: &[ServiceSeries], other: &[f64], total: &[f64]) -> String {
    let name_width = top
        .iter()
        .map(|s| s.name.chars().count())
        .chain(["Other".len(), "Total".len()])
        .max()
        .unwrap_or(5);

    let mut buffer = format!(
        "{:<nw$} ${:<8} {:>5} {:<7}\n",
        "Service",
        "Yday",
        "∆%",
        "Last 7d",
        nw = name_width
    );
    for series in top {
        buffer.push_str(&render_row(&series.name, &series.costs, name_width));
    }
    buffer.push_str(&render_row("Other", other, name_width));
    buffer.push_str(&render_row("Total", total, name_width));
    buffer
}

fn render_row(label: &str, costs: &[f64], name_width: usize) -> String {
    let yesterday = costs.last().copied().unwrap_or(0.0);
    format!(
        "{:<nw$} ${:>8} {:>4.0}% {:<7}\n",
        label,
        format_amount(yesterday),
        delta_percent(costs),
        sparkline(costs),
        nw = name_width
    )
}

/// One-line human-readable summary of yesterday's total, annotated against
/// the daily credit allowance when a budget is configured.
pub fn render_summary(
    total_last_day: f64,
    account_name: &str,
    budget: Option<&BudgetContext>,
) -> String {
    match budget {
        Some(budget) => {
            let relative = (total_last_day / budget.daily_allowance) * 100.0;
            let status = BudgetStatus::for_percent(relative);
            format!(
                "{} Yesterday's cost for {} ${} is {:.2}% of credit budget ${} for the day.",
                status.marker(),
                account_name,
                format_amount(total_last_day),
                relative,
                format_amount(budget.daily_allowance),
            )
        }
        None => format!(
            "Yesterday's cost for account {} was ${}",
            account_name,
            format_amount(total_last_day)
        ),
    }
}

/// Two-decimal amount with comma-grouped thousands, e.g. `1,234.56`.
pub fn format_amount(value: f64) -> String {
    let raw = format!("{:.2}", value);
    let (int_part, frac_part) = match raw.split_once('.') {
        Some(parts) => parts,
        None => (raw.as_str(), "00"),
    };
    let negative = int_part.starts_with('-');
    let digits = int_part.trim_start_matches('-');
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{}{}.{}", if negative { "-" } else { "" }, grouped, frac_part)
}
