use std::mem::MaybeUninit;

const MAX_HEADER_NUM: usize = 64;

#[derive(Debug, Copy, Clone)]
pub struct TestCase {
    name: &'static str,
    file: TestFile,
}

impl TestCase {
    pub fn new(name: &'static str, file: TestFile) -> Self {
        Self { name, file }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn file(&self) -> &TestFile {
        &self.file
    }

    pub fn file_name(&self) -> &'static str {
        self.file().file_name
    }
}

/// A raw request fixture embedded in the bench binary.
#[derive(Debug, Copy, Clone)]
pub struct TestFile {
    file_name: &'static str,
    content: &'static str,
}

impl TestFile {
    pub const fn new(file_name: &'static str, content: &'static str) -> Self {
        Self { file_name, content }
    }

    pub fn content(&self) -> &'static str {
        self.content
    }

    pub fn file_name(&self) -> &'static str {
        self.file_name
    }

    /// Splits the fixture into the raw tokens a parser would hand to the classifier.
    ///
    /// # Panics
    ///
    /// Panics when the fixture is not a complete request head.
    pub fn tokens(&self) -> RequestTokens {
        let content = self.content;
        let request_line = content.split("\r\n").next().expect("fixture has a request line");
        let mut parts = request_line.split(' ');
        let method = parts.next().expect("fixture has a method").as_bytes();
        let version = parts.nth(1).expect("fixture has a version").as_bytes();

        let mut req = httparse::Request::new(&mut []);
        let mut headers: [MaybeUninit<httparse::Header>; MAX_HEADER_NUM] = [const { MaybeUninit::uninit() }; MAX_HEADER_NUM];
        req.parse_with_uninit_headers(content.as_bytes(), &mut headers).expect("fixture is a valid request head");

        let header_names = req.headers.iter().map(|header| header.name.as_bytes()).collect();
        RequestTokens { method, version, header_names }
    }
}

/// Raw tokens of one request head, borrowed from the fixture.
#[derive(Debug, Clone)]
pub struct RequestTokens {
    pub method: &'static [u8],
    pub version: &'static [u8],
    pub header_names: Vec<&'static [u8]>,
}
