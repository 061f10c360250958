#[derive(Debug)]
pub struct Greeting(String);

//if an instance of Greeting exists somewhere in the code, it is guaranteed to be non-empty
// 1 you can only create one by going through the below pub fn parse (coz String inside of it is private)
// 2 that function only returns an instance if the value is non-empty
//this means the state cell itself never has to re-check what it's handed
impl Greeting {
    pub fn parse(greeting: String) -> Result<Self, String> {
        //only the empty string is rejected - whitespace-only values are accepted on purpose
        if greeting.is_empty() {
            Err(String::from("greeting must not be empty"))
        } else {
            Ok(Self(greeting))
        }
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for Greeting {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
