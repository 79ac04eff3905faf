/// Exchange trading pair symbol, e.g. "SUIUSDT"
pub type Symbol = String;
