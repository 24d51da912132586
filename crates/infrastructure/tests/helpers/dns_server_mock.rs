#![allow(dead_code)]
use hickory_proto::op::{Message, MessageType, OpCode, ResponseCode};
use hickory_proto::rr::rdata::{A, TXT};
use hickory_proto::rr::{DNSClass, RData, Record};
use hickory_proto::serialize::binary::BinEncodable;
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::UdpSocket;
use tokio::sync::oneshot;

/// What the mock server sends back for one query.
pub enum MockReply {
    Message(Message),
    Raw(Vec<u8>),
    Delayed(Duration, Message),
    Silent,
}

type Handler = dyn Fn(&Message) -> MockReply + Send + Sync;

pub struct MockDnsServer {
    addr: SocketAddr,
    queries: Arc<AtomicU64>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    pub async fn start<F>(handler: F) -> Self
    where
        F: Fn(&Message) -> MockReply + Send + Sync + 'static,
    {
        let socket = Arc::new(UdpSocket::bind("127.0.0.1:0").await.unwrap());
        let addr = socket.local_addr().unwrap();
        let queries = Arc::new(AtomicU64::new(0));
        let handler: Arc<Handler> = Arc::new(handler);

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();
        let counter = Arc::clone(&queries);

        tokio::spawn(async move {
            let mut buf = vec![0u8; 4096];
            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => break,
                    result = socket.recv_from(&mut buf) => {
                        let Ok((len, peer)) = result else { continue };
                        let Ok(query) = Message::from_vec(&buf[..len]) else { continue };
                        counter.fetch_add(1, Ordering::SeqCst);

                        match handler(&query) {
                            MockReply::Message(reply) => {
                                let _ = socket.send_to(&reply.to_bytes().unwrap(), peer).await;
                            }
                            MockReply::Raw(bytes) => {
                                let _ = socket.send_to(&bytes, peer).await;
                            }
                            MockReply::Delayed(delay, reply) => {
                                let socket = Arc::clone(&socket);
                                tokio::spawn(async move {
                                    tokio::time::sleep(delay).await;
                                    let _ = socket.send_to(&reply.to_bytes().unwrap(), peer).await;
                                });
                            }
                            MockReply::Silent => {}
                        }
                    }
                }
            }
        });

        Self {
            addr,
            queries,
            shutdown_tx: Some(shutdown_tx),
        }
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn query_count(&self) -> u64 {
        self.queries.load(Ordering::SeqCst)
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

/// Response to `query` with its ID and questions copied over.
pub fn reply_to(query: &Message, rcode: ResponseCode, answers: Vec<Record>) -> Message {
    let mut reply = Message::new(query.id(), MessageType::Response, OpCode::Query);
    reply.set_response_code(rcode);
    for question in query.queries() {
        reply.add_query(question.clone());
    }
    for answer in answers {
        reply.add_answer(answer);
    }
    reply
}

pub fn a_answers(query: &Message, ip: Ipv4Addr) -> Vec<Record> {
    query
        .queries()
        .iter()
        .map(|q| Record::from_rdata(q.name().clone(), 30, RData::A(A(ip))))
        .collect()
}

/// dnsmasq-style CHAOS TXT answers; `value_for` maps a question name to its
/// text, `None` leaves the question unanswered.
pub fn chaos_answers<F>(query: &Message, value_for: F) -> Vec<Record>
where
    F: Fn(&str) -> Option<String>,
{
    query
        .queries()
        .iter()
        .filter_map(|q| {
            let value = value_for(&q.name().to_ascii())?;
            let mut record =
                Record::from_rdata(q.name().clone(), 0, RData::TXT(TXT::new(vec![value])));
            record.set_dns_class(DNSClass::CH);
            Some(record)
        })
        .collect()
}
