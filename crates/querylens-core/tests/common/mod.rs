#![allow(dead_code)]

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};

use querylens_core::geometry::{vec2, Rect};
use querylens_core::preview::{DisplayElement, ModalHost, PreviewTarget};
use querylens_core::transform::{InputKind, ViewTransform};
use querylens_core::viewport::{ListenerHandle, ListenerScope, ViewportHost};

pub const BODY: &str = "modal-body";

/// A content node that remembers the parent it was built under.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub name: String,
    pub home: String,
    pub parent: String,
}

/// In-memory host standing in for a real UI toolkit.
pub struct MockHost {
    pub scaffold: bool,
    pub rect: Option<Rect>,
    pub modal_open: bool,
    pub show_calls: usize,
    pub title: String,
    pub listeners: HashMap<ListenerHandle, (ListenerScope, InputKind)>,
    pub wrapped: HashMap<u64, (Node, ViewTransform)>,
    pub restored: Vec<Node>,
    pub built: Vec<DisplayElement>,
    pub scroll_body: Option<String>,
    next_id: u64,
}

impl MockHost {
    pub fn new() -> Self {
        Self {
            scaffold: true,
            rect: Some(Rect::from_min_size(vec2(100.0, 50.0), vec2(800.0, 600.0))),
            modal_open: false,
            show_calls: 0,
            title: String::new(),
            listeners: HashMap::new(),
            wrapped: HashMap::new(),
            restored: Vec::new(),
            built: Vec::new(),
            scroll_body: None,
            next_id: 0,
        }
    }

    pub fn without_scaffold() -> Self {
        Self {
            scaffold: false,
            ..Self::new()
        }
    }

    pub fn node(name: &str) -> Node {
        Node {
            name: name.to_string(),
            home: "staging".to_string(),
            parent: "staging".to_string(),
        }
    }

    pub fn listeners_with_scope(&self, scope: ListenerScope) -> Vec<InputKind> {
        self.listeners
            .values()
            .filter(|(s, _)| *s == scope)
            .map(|(_, k)| *k)
            .collect()
    }

    /// Transform currently applied to the only wrapped node.
    pub fn applied_transform(&self) -> Option<ViewTransform> {
        self.wrapped.values().next().map(|(_, t)| *t)
    }

    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

impl ViewportHost for MockHost {
    type Container = &'static str;
    type Content = Node;
    type Wrapper = u64;

    fn container_rect(&self, _container: &Self::Container) -> Option<Rect> {
        self.rect
    }

    fn wrap(&mut self, container: &Self::Container, mut content: Node) -> u64 {
        content.parent = container.to_string();
        let id = self.next_id();
        self.wrapped.insert(id, (content, ViewTransform::IDENTITY));
        id
    }

    fn unwrap(&mut self, wrapper: u64) {
        if let Some((mut node, _)) = self.wrapped.remove(&wrapper) {
            node.parent = node.home.clone();
            self.restored.push(node);
        }
    }

    fn apply_transform(&mut self, wrapper: &u64, transform: &ViewTransform) {
        if let Some(entry) = self.wrapped.get_mut(wrapper) {
            entry.1 = *transform;
        }
    }

    fn listen(
        &mut self,
        _container: &Self::Container,
        scope: ListenerScope,
        kind: InputKind,
    ) -> ListenerHandle {
        let handle = ListenerHandle(self.next_id());
        self.listeners.insert(handle, (scope, kind));
        handle
    }

    fn unlisten(&mut self, handle: ListenerHandle) {
        self.listeners.remove(&handle);
    }
}

impl ModalHost for MockHost {
    type Fragment = String;

    fn content_area(&self) -> Option<Self::Container> {
        self.scaffold.then_some(BODY)
    }

    fn build_content(&mut self, target: &PreviewTarget, element: &DisplayElement) -> Node {
        self.built.push(*element);
        MockHost::node(target.title())
    }

    fn show_scroll_body(&mut self, fragment: String) {
        self.scroll_body = Some(fragment);
    }

    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn show_modal(&mut self) {
        self.show_calls += 1;
        self.modal_open = true;
    }

    fn hide_modal(&mut self) {
        self.modal_open = false;
    }

    fn is_modal_open(&self) -> bool {
        self.modal_open
    }
}

/// A server that answers exactly one request and hands back what it received.
pub struct OneShotServer {
    pub url: String,
    handle: JoinHandle<String>,
}

impl OneShotServer {
    pub fn start(status_line: &str, content_type: &str, body: impl Into<Vec<u8>>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind test listener");
        let addr = listener.local_addr().expect("local addr");
        let status_line = status_line.to_string();
        let content_type = content_type.to_string();
        let body = body.into();

        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().expect("accept");
            let request = read_request(&mut stream);
            let header = format!(
                "HTTP/1.1 {status_line}\r\nContent-Type: {content_type}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                body.len()
            );
            stream.write_all(header.as_bytes()).expect("write header");
            stream.write_all(&body).expect("write body");
            stream.flush().expect("flush");
            request
        });

        Self {
            url: format!("http://{addr}"),
            handle,
        }
    }

    /// The raw request the server received.
    pub fn request(self) -> String {
        self.handle.join().expect("server thread")
    }
}

fn read_request(stream: &mut impl Read) -> String {
    let mut data = Vec::new();
    let mut chunk = [0u8; 1024];

    let header_end = loop {
        let n = stream.read(&mut chunk).expect("read request");
        if n == 0 {
            return String::from_utf8_lossy(&data).into_owned();
        }
        data.extend_from_slice(&chunk[..n]);
        if let Some(pos) = find(&data, b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let head = String::from_utf8_lossy(&data[..header_end]).to_ascii_lowercase();
    let content_length = head
        .lines()
        .find_map(|line| line.strip_prefix("content-length:"))
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(0);

    while data.len() < header_end + content_length {
        let n = stream.read(&mut chunk).expect("read body");
        if n == 0 {
            break;
        }
        data.extend_from_slice(&chunk[..n]);
    }

    String::from_utf8_lossy(&data).into_owned()
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}
