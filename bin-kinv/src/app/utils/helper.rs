use crate::app::err::*;
use kinv::Sign;
use kinv_link::{Braid, Link, LinkError};
use super::InputFormat;

pub fn measure<F, Res>(proc: F) -> (Res, std::time::Duration)
where F: FnOnce() -> Res {
    let start = std::time::Instant::now();
    let res = proc();
    let time = start.elapsed();
    (res, time)
}

pub fn guard_panic<F, R>(f: F) -> Result<R, Box<dyn std::error::Error>>
where F: FnOnce() -> Result<R, Box<dyn std::error::Error>> + std::panic::UnwindSafe {
    std::panic::catch_unwind(|| {
        f()
    }).unwrap_or_else(|e| {
        let info = match e.downcast::<String>() {
            Ok(v) => *v,
            Err(e) => match e.downcast::<&str>() {
                Ok(v) => v.to_string(),
                _ => "Unknown Source of Error".to_owned()
            }
        };
        err!("panic: {info}")
    })
}

pub fn parse_code(input: &str) -> Result<Vec<i32>, Box<dyn std::error::Error>> {
    match serde_json::from_str::<Vec<i32>>(input) {
        Ok(code) => Ok(code),
        Err(_) => err!("invalid input: '{}', expected an integer array like [1,-2,1].", input)
    }
}

pub fn load_link(input: &str, format: InputFormat) -> Result<Link, Box<dyn std::error::Error>> {
    let code = parse_code(input)?;
    let l = match format {
        InputFormat::Braid => Link::from_braid(Braid::from_word(&code)?),
        InputFormat::Gauss => Link::from_gauss_code(code)?,
        InputFormat::Dt    => Link::from_dt_code(code)?,
    };
    Ok(l)
}

pub fn parse_signs(s: &str) -> Result<Vec<Sign>, Box<dyn std::error::Error>> {
    s.chars().filter(|c| !c.is_whitespace() && *c != ',').map(|c|
        match Sign::try_from(c) {
            Ok(e) => Ok(e),
            Err(c) => err!("invalid sign: '{c}', expected '+' or '-'.")
        }
    ).collect()
}

// The value, or the reason it is not defined.
pub fn or_reason<T, F>(res: Result<T, LinkError>, f: F) -> String
where F: FnOnce(T) -> String {
    match res {
        Ok(v) => f(v),
        Err(e) => format!("({e})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse() {
        assert_eq!(parse_code("[1, -2, 1]").unwrap(), vec![1, -2, 1]);
        assert!(parse_code("3_1").is_err());
    }

    #[test]
    fn load() {
        let l = load_link("[1,1,1]", InputFormat::Braid).unwrap();
        assert_eq!(l.crossing_num(), 3);

        let l = load_link("[4,6,2]", InputFormat::Dt).unwrap();
        assert_eq!(l.gauss_code().unwrap(), &[1, -3, 2, -1, 3, -2]);

        assert!(load_link("[1,0]", InputFormat::Braid).is_err());
        assert!(load_link("[1,1]", InputFormat::Gauss).is_err());
    }

    #[test]
    fn signs() {
        assert_eq!(parse_signs("+-+").unwrap(), vec![Sign::Pos, Sign::Neg, Sign::Pos]);
        assert_eq!(parse_signs("+, -").unwrap(), vec![Sign::Pos, Sign::Neg]);
        assert!(parse_signs("+x").is_err());
    }

    #[test]
    fn guard() {
        let res: Result<(), _> = guard_panic(|| panic!("boom"));
        assert!(res.unwrap_err().to_string().contains("boom"));
    }
}
