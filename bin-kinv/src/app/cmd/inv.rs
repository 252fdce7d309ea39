use log::info;
use kinv::format::{seq, table};
use kinv_link::Link;
use crate::app::utils::*;
use crate::app::err::*;

pub fn dispatch(args: &Args) -> Result<String, Box<dyn std::error::Error>> {
    App::new(args.clone()).run()
}

#[derive(Clone, Debug, clap::Args)]
pub struct Args {
    pub input: String,

    #[arg(short, long, default_value = "braid")]
    pub format: InputFormat,

    #[arg(short = 'x', long, default_value = "t")]
    pub var: String,

    #[arg(short = 'm', long)]
    pub show_matrix: bool,

    #[arg(long, default_value = "0")]
    pub log: u8,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            input: String::new(),
            format: InputFormat::default(),
            var: String::from("t"),
            show_matrix: false,
            log: 0
        }
    }
}

pub struct App {
    args: Args,
    buff: String,
}

impl App {
    pub fn new(args: Args) -> Self {
        let buff = String::with_capacity(1024);
        App { args, buff }
    }

    pub fn run(&mut self) -> Result<String, Box<dyn std::error::Error>> {
        ensure!(!self.args.var.is_empty(), "variable name must not be empty.");

        let l = load_link(&self.args.input, self.args.format)?;

        info!("link: {l}");

        self.show_invariants(&l);

        if self.args.show_matrix {
            self.show_seifert_matrix(&l)?;
        }

        Ok(self.flush())
    }

    fn show_invariants(&mut self, l: &Link) {
        let var = self.args.var.as_str();
        let rows = [
            ("crossings",    l.crossing_num().to_string()),
            ("link number",  l.link_number().to_string()),
            ("knot",         l.is_knot().to_string()),
            ("alternating",  or_reason(l.is_alternating(), |a| a.to_string())),
            ("genus",        or_reason(l.genus(), |g| g.to_string())),
            ("signature",    or_reason(l.signature(), |s| s.to_string())),
            ("alexander",    or_reason(l.alexander_polynomial_in(var), |p| p)),
            ("determinant",  or_reason(l.knot_determinant(), |d| d.to_string())),
            ("arf",          or_reason(l.arf_invariant(), |a| a.to_string())),
            ("smallest",     or_reason(l.smallest_equivalent(), |b| seq(b.word()))),
        ];
        self.out(&table(("invariant", "value"), rows));
    }

    fn show_seifert_matrix(&mut self, l: &Link) -> Result<(), Box<dyn std::error::Error>> {
        let v = l.seifert_matrix()?;
        let rows = v.row_vecs().into_iter().map(seq);
        self.out(&format!("seifert: {}", seq(rows)));
        Ok(())
    }

    fn out(&mut self, str: &str) {
        self.buff.push_str(str);
        self.buff.push('\n');
    }

    fn flush(&mut self) -> String {
        let res = std::mem::take(&mut self.buff);
        res.trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trefoil() {
        let args = Args {
            input: "[1,2,1,2]".to_string(),
            show_matrix: true,
            ..Default::default()
        };
        let res = dispatch(&args).unwrap();
        assert!(res.contains("t² - t + 1"));
        assert!(res.contains("seifert: [[-1, 1], [0, -1]]"));
    }

    #[test]
    fn var_name() {
        let args = Args {
            input: "[1,1,1]".to_string(),
            var: "q".to_string(),
            ..Default::default()
        };
        let res = dispatch(&args).unwrap();
        assert!(res.contains("q² - q + 1"));
    }

    #[test]
    fn link() {
        let args = Args {
            input: "[-1,3,1,3]".to_string(),
            ..Default::default()
        };
        let res = dispatch(&args).unwrap();
        assert!(res.contains("only defined for knots"));
    }

    #[test]
    fn from_gauss() {
        let args = Args {
            input: "[1,-3,2,-1,3,-2]".to_string(),
            format: InputFormat::Gauss,
            ..Default::default()
        };
        let res = dispatch(&args).unwrap();
        assert!(res.contains("not supported"));

        let args = Args { show_matrix: true, ..args };
        assert!(dispatch(&args).is_err());
    }

    #[test]
    fn empty_var() {
        let args = Args {
            input: "[1,1,1]".to_string(),
            var: String::new(),
            ..Default::default()
        };
        assert!(dispatch(&args).is_err());
    }
}
