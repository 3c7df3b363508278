use derive_more::Display;

pub fn is_leap_year(year: i64) -> bool {
    year % 400 == 0 || (year % 4 == 0 && year % 100 != 0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Verdict {
    #[display("YES")]
    Yes,
    #[display("NO")]
    No,
}

impl From<bool> for Verdict {
    fn from(leap: bool) -> Self {
        match leap {
            true => Verdict::Yes,
            false => Verdict::No,
        }
    }
}
