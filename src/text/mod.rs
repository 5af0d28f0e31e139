mod recurring;

pub use recurring::first_recurring_char;
