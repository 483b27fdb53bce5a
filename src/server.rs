use crate::routes;
use crate::terminal::TerminalManager;

use directories::UserDirs;
use std::sync::{Arc, Mutex};
use tokio::signal;
use tokio_stream::wrappers::UnixListenerStream;

pub struct Server {
    terminals: Arc<Mutex<TerminalManager>>,
    port: Option<u16>,
    socket_path: String,
}

impl Server {
    pub async fn start(&self) {
        match self.port {
            Some(port) => {
                let (_, server) = warp::serve(routes::routes(self.terminals.clone()))
                    .bind_with_graceful_shutdown(([127, 0, 0, 1], port), async {
                        signal::ctrl_c().await.unwrap()
                    });
                server.await;
            }
            None => {
                let listener = tokio::net::UnixListener::bind(&self.socket_path).unwrap();
                let incoming = UnixListenerStream::new(listener);
                let server = warp::serve(routes::routes(self.terminals.clone()))
                    .serve_incoming_with_graceful_shutdown(incoming, async {
                        signal::ctrl_c().await.unwrap()
                    });
                server.await;
            }
        }
    }
}

impl Drop for Server {
    fn drop(&mut self) {
        println!("Shutting down server...");
        if self.port.is_none() {
            let _ = std::fs::remove_file(&self.socket_path);
        }
    }
}

pub fn get_server(port: Option<u16>) -> Server {
    let socket_path = UserDirs::new()
        .unwrap()
        .home_dir()
        .join(".protocol-terminal.sock");
    Server {
        terminals: Arc::new(Mutex::new(TerminalManager::new().unwrap())),
        port,
        socket_path: socket_path.to_str().unwrap().to_string(),
    }
}
