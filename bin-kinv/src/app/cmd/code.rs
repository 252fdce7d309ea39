use kinv::format::seq;
use kinv_link::Link;
use crate::app::utils::*;

pub fn dispatch(args: &Args) -> Result<String, Box<dyn std::error::Error>> {
    App::new(args.clone()).run()
}

#[derive(Clone, Default, Debug, clap::Args)]
pub struct Args {
    pub input: String,

    #[arg(short, long, default_value = "braid")]
    pub format: InputFormat,

    #[arg(long, default_value = "0")]
    pub log: u8,
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
        let l = load_link(&self.args.input, self.args.format)?;
        self.show_codes(&l);
        Ok(self.flush())
    }

    fn show_codes(&mut self, l: &Link) {
        let braid = or_reason(l.braid_word(), seq);
        let gauss = or_reason(l.gauss_code(), seq);
        let dt = or_reason(l.dt_code(), seq);
        let pd = or_reason(l.pd_code(), |pd| seq(pd.iter().map(seq)));

        self.out(&format!("braid: {braid}"));
        self.out(&format!("gauss: {gauss}"));
        self.out(&format!("dt:    {dt}"));
        self.out(&format!("pd:    {pd}"));
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
