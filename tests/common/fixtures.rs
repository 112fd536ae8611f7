use image::{ImageFormat, Rgb, RgbImage};
use serde_json::{json, Value};
use std::io::Cursor;

pub const ORG_NAME: &str = "Condomínio Jardim das Flores";

/// Minimal request: organization, March 2024, no records.
pub fn empty_request() -> Value {
    json!({
        "organization": {
            "name": ORG_NAME,
            "address": "Rua das Acácias, 120 - São Paulo/SP"
        },
        "periodRange": { "start": "2024-03-01", "end": "2024-03-31" },
        "sections": {},
        "totals": {},
        "generatedAt": "2024-03-15T18:45:00"
    })
}

pub fn ticket(n: usize) -> Value {
    let status = if n % 2 == 0 { "concluido" } else { "em_andamento" };
    json!({
        "id": n,
        "title": format!("Vazamento no bloco {}", n),
        "description": "Infiltração na parede da garagem próxima ao elevador.",
        "status": status,
        "priority": "alta",
        "protocol": format!("MAN-20240310-{:04}", n),
        "responsible": "Carlos Zelador",
        "location": "Garagem G2",
        "createdAt": "2024-03-10T09:30:00",
        "timeline": [
            { "status": "pendente", "description": "Chamado aberto", "date": "2024-03-10T09:30:00" },
            { "status": "em_andamento", "description": "Encanador acionado", "date": "2024-03-11T14:00:00" }
        ]
    })
}

/// Two maintenance tickets, every other category empty, totals `{manutencoes: 2}`.
pub fn maintenance_request() -> Value {
    let mut request = empty_request();
    request["sections"] = json!({
        "manutencoes": [ticket(1), ticket(2)],
        "ocorrencias": [],
        "vistorias": [],
        "votacoes": []
    });
    request["totals"] = json!({ "manutencoes": 2 });
    request
}

pub fn vote(title: &str, options: &[(&str, u64)]) -> Value {
    let options: Vec<Value> = options
        .iter()
        .map(|(label, votes)| json!({ "label": label, "votes": votes }))
        .collect();
    json!({
        "title": title,
        "status": "encerrada",
        "description": "Assembleia extraordinária",
        "options": options,
        "dueDate": "2024-03-28"
    })
}

/// One or more records in most categories, plus an unknown key.
pub fn mixed_request() -> Value {
    let mut request = empty_request();
    request["sections"] = json!({
        "manutencoes": [ticket(1)],
        "ocorrencias": [{
            "title": "Barulho após as 22h",
            "status": "pendente",
            "unit": 304,
            "block": "B",
            "createdAt": "2024-03-05"
        }],
        "vistorias": [],
        "checklists": [{
            "title": "Ronda semanal",
            "status": "concluido",
            "checklistItems": [
                { "label": "Extintores", "completed": true },
                { "label": "Luzes de emergência", "completed": false }
            ]
        }],
        "antes_depois": [{
            "title": "Pintura da fachada",
            "status": "concluido",
            "beforeImage": "antes.png",
            "afterImage": "depois.png"
        }],
        "eventos": [{ "title": "Festa junina", "location": "Salão", "dueDate": "2024-06-15" }],
        "votacoes": [vote("Troca do portão", &[("Sim", 30), ("Não", 12), ("Abstenção", 0)])],
        "moradores": [{ "name": "Ana Souza", "unit": "101", "block": "A", "phone": "(11) 90000-0000" }],
        "telefones_uteis": [{ "name": "Portaria", "phone": "(11) 5555-0000" }],
        "aquisicoes": [{ "title": "Cortador de grama", "price": 1234.5, "status": "aprovado" }],
        "caronas": [],
        "zeladoria": [{ "title": "Ignorado" }]
    });
    request["totals"] = json!({
        "manutencoes": 1,
        "ocorrencias": 1,
        "votacoes": 1,
        "zeladoria": 7
    });
    request
}

/// `count` maintenance tickets; enough of them spill over several pages.
pub fn many_tickets(count: usize) -> Value {
    let mut request = empty_request();
    let tickets: Vec<Value> = (1..=count).map(ticket).collect();
    request["sections"] = json!({ "manutencoes": tickets });
    request["totals"] = json!({ "manutencoes": count });
    request
}

/// A small solid-color PNG.
pub fn png(width: u32, height: u32, rgb: [u8; 3]) -> Vec<u8> {
    let img = RgbImage::from_pixel(width, height, Rgb(rgb));
    let mut bytes = Cursor::new(Vec::new());
    img.write_to(&mut bytes, ImageFormat::Png)
        .expect("encoding an in-memory PNG");
    bytes.into_inner()
}
