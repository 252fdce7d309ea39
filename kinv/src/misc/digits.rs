pub trait IntoDigits: Sized { 
    type Digit;
    fn into_digits(self) -> Vec<Self::Digit>;
}

macro_rules! impl_into_digits {
    ($t: ty, $d: ty) => {
        impl IntoDigits for $t { 
            type Digit = $d;
            fn into_digits(self) -> Vec<$d> {
                if self == 0 { return vec![0] }
        
                let mut num = self;
                let mut rev = vec![];
                while num > 0 { 
                    rev.push((num % 10) as $d);
                    num /= 10;
                }
                rev.reverse();
                rev
            }
        }                
    };
}

impl_into_digits!(usize, u8);
