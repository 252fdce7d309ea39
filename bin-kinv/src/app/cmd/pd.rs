use kinv::format::seq;
use kinv_link::{pd_code_from_braid, Braid, OrientedGaussCode, PdCode};
use crate::app::utils::*;

pub fn dispatch(args: &Args) -> Result<String, Box<dyn std::error::Error>> {
    App::new(args.clone()).run()
}

#[derive(Clone, Default, Debug, clap::Args)]
pub struct Args {
    /// A braid word, or a Gauss code when `--signs` is given.
    pub input: String,

    /// Crossing signs of a Gauss code, e.g. "+-+".
    #[arg(short, long)]
    pub signs: Option<String>,

    #[arg(long, default_value = "0")]
    pub log: u8,
}

pub struct App {
    args: Args,
}

impl App {
    pub fn new(args: Args) -> Self {
        App { args }
    }

    pub fn run(&mut self) -> Result<String, Box<dyn std::error::Error>> {
        let code = parse_code(&self.args.input)?;
        let pd: PdCode = match &self.args.signs {
            Some(s) => {
                let signs = parse_signs(s)?;
                OrientedGaussCode::new(code, signs)?.pd_code()
            },
            None => {
                let braid = Braid::from_word(&code)?;
                pd_code_from_braid(&braid)?
            }
        };
        Ok(seq(pd.iter().map(seq)))
    }
}
