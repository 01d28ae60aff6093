//! The Sock Shop deployment topology.
//!
//! This module declares the fixed component graph the tool exists to draw:
//! the Sock Shop reference application on a managed Kubernetes cluster,
//! with its supporting cloud networking, DNS, certificate, and monitoring
//! components. Everything here is literal data known at authoring time;
//! nothing is computed.
//!
//! Construction order follows the diagram's visual nesting: the cloud
//! boundary contains the network boundary, which contains the cluster
//! boundary, which contains the namespace boundaries and their layer
//! groupings. Edges are declared last and reference the nodes above.

use gantry_core::{
    color::Color,
    identifier::Id,
    semantic::{Cluster, Diagram, Edge, Element, LineStyle, Node, NodeKind, RankDirection, Scope},
};

/// Title of the generated diagram; the output filename is derived from it.
pub const TITLE: &str = "Sock Shop Microservices Architecture";

fn node(id: &str, label: &str, kind: NodeKind) -> Element {
    Element::Node(Node::new(Id::new(id), label, kind))
}

fn cluster(id: &str, label: &str, elements: Vec<Element>) -> Element {
    Element::Cluster(Cluster::new(Id::new(id), label, Scope::new(elements)))
}

fn edge(edge: Edge) -> Element {
    Element::Edge(edge)
}

fn id(name: &str) -> Id {
    Id::new(name)
}

/// Builds the Sock Shop architecture diagram.
///
/// Calling this constructs the semantic model only; nothing is rendered
/// and no files are written.
pub fn sock_shop() -> Diagram {
    let green = Color::new("green").expect("'green' is a valid CSS color");
    let purple = Color::new("purple").expect("'purple' is a valid CSS color");

    let elements = vec![
        // External users
        node("users", "Users", NodeKind::Users),
        // Cloud boundary: DNS and certificates live outside the VPC
        cluster(
            "aws_cloud",
            "AWS Cloud",
            vec![
                node(
                    "route53",
                    "Route53\nsock.blessedc.org\n(Managed by ExternalDNS)",
                    NodeKind::DnsZone,
                ),
                node(
                    "acm",
                    "ACM Wildcard\n*.sock.blessedc.org\n(+ sock.blessedc.org SAN)",
                    NodeKind::Certificate,
                ),
                cluster(
                    "vpc",
                    "VPC (Terraform-managed)",
                    vec![
                        node(
                            "alb",
                            "Application\nLoad Balancer\n(ALB - TLS Termination)",
                            NodeKind::LoadBalancer,
                        ),
                        node(
                            "iam_note",
                            "IRSA roles\n(alb-controller, external-dns)",
                            NodeKind::Instance,
                        ),
                        cluster(
                            "eks",
                            "EKS Cluster",
                            vec![
                                node("control_plane", "EKS Control Plane", NodeKind::ControlPlane),
                                cluster(
                                    "kube_system",
                                    "kube-system",
                                    vec![
                                        node(
                                            "alb_controller",
                                            "aws-load-balancer-controller\n(Deployment, IRSA)",
                                            NodeKind::Deployment,
                                        ),
                                        node(
                                            "external_dns",
                                            "external-dns\n(Deployment, IRSA)",
                                            NodeKind::Deployment,
                                        ),
                                    ],
                                ),
                                cluster(
                                    "worker_nodes",
                                    "Worker Nodes",
                                    vec![
                                        cluster(
                                            "sock_shop",
                                            "Namespace: sock-shop",
                                            vec![
                                                cluster(
                                                    "application_layer",
                                                    "Application Layer",
                                                    vec![
                                                        node(
                                                            "ingress",
                                                            "ALB Ingress (Ingress resources)",
                                                            NodeKind::Ingress,
                                                        ),
                                                        node(
                                                            "frontend",
                                                            "Frontend\nService\n({{ .Release.Name }}-frontend)",
                                                            NodeKind::Pod,
                                                        ),
                                                    ],
                                                ),
                                                cluster(
                                                    "business_logic",
                                                    "Business Logic",
                                                    vec![
                                                        node("catalogue", "Catalogue\nService", NodeKind::Pod),
                                                        node("carts", "Carts\nService", NodeKind::Pod),
                                                        node("orders", "Orders\nService", NodeKind::Pod),
                                                        node("payment", "Payment\nService", NodeKind::Pod),
                                                        node("user", "User\nService", NodeKind::Pod),
                                                        node("shipping", "Shipping\nService", NodeKind::Pod),
                                                        node("queue_master", "Queue\nMaster", NodeKind::Pod),
                                                    ],
                                                ),
                                                cluster(
                                                    "data_layer",
                                                    "Data Layer",
                                                    vec![
                                                        node(
                                                            "session_db",
                                                            "Session DB\n(Redis)",
                                                            NodeKind::InMemoryStore,
                                                        ),
                                                        node("carts_db", "Carts DB", NodeKind::DocumentStore),
                                                        node("user_db", "User DB", NodeKind::DocumentStore),
                                                        node(
                                                            "catalogue_db",
                                                            "Catalogue DB\n(MySQL / RDS)",
                                                            NodeKind::RelationalStore,
                                                        ),
                                                        node("orders_db", "Orders DB", NodeKind::DocumentStore),
                                                        node("rabbitmq", "RabbitMQ", NodeKind::MessageQueue),
                                                    ],
                                                ),
                                            ],
                                        ),
                                        cluster(
                                            "monitoring",
                                            "Namespace: monitoring",
                                            vec![
                                                node(
                                                    "prometheus",
                                                    "Prometheus\n(Helm)",
                                                    NodeKind::MetricsCollector,
                                                ),
                                                node("grafana", "Grafana\n(Helm)", NodeKind::Dashboard),
                                            ],
                                        ),
                                    ],
                                ),
                            ],
                        ),
                    ],
                ),
            ],
        ),
        // Traffic flow
        edge(Edge::new(id("users"), id("route53")).with_label("https://sock.blessedc.org")),
        edge(
            Edge::new(id("route53"), id("alb"))
                .with_label("A record -> ALB\n(created by ExternalDNS)"),
        ),
        // ExternalDNS keeps the zone in sync
        edge(
            Edge::new(id("external_dns"), id("route53"))
                .with_line_style(LineStyle::Dashed)
                .with_label("creates/updates DNS records"),
        ),
        // ACM certificate bound to the ALB, validated through Route53
        edge(
            Edge::new(id("acm"), id("alb"))
                .with_line_style(LineStyle::Dotted)
                .with_color(green)
                .with_label("DNS validated via Route53"),
        ),
        // Controller reconciliation and ingress routing
        edge(
            Edge::new(id("alb_controller"), id("alb"))
                .with_label("reconciles Ingress\ncreates target groups/listeners"),
        ),
        edge(Edge::new(id("alb"), id("ingress")).with_label("routes traffic")),
        edge(Edge::new(id("ingress"), id("frontend"))),
        // Frontend fans out to the backend services and its session store
        edge(Edge::fan_out(
            id("frontend"),
            vec![
                id("catalogue"),
                id("carts"),
                id("orders"),
                id("user"),
                id("payment"),
                id("shipping"),
            ],
        )),
        edge(Edge::new(id("frontend"), id("session_db"))),
        // Service to datastore connections
        edge(Edge::new(id("catalogue"), id("catalogue_db"))),
        edge(Edge::new(id("carts"), id("carts_db"))),
        edge(Edge::new(id("orders"), id("orders_db"))),
        edge(Edge::new(id("user"), id("user_db"))),
        edge(Edge::new(id("queue_master"), id("rabbitmq"))),
        // Monitoring scrapes
        edge(
            Edge::fan_out(
                id("prometheus"),
                vec![
                    id("frontend"),
                    id("catalogue"),
                    id("carts"),
                    id("orders"),
                    id("payment"),
                    id("user"),
                    id("shipping"),
                ],
            )
            .with_line_style(LineStyle::Dashed)
            .with_color(purple)
            .with_label("scrapes"),
        ),
        edge(
            Edge::new(id("grafana"), id("prometheus"))
                .with_line_style(LineStyle::Dashed)
                .with_color(purple),
        ),
        // IRSA bindings
        edge(
            Edge::new(id("iam_note"), id("alb_controller"))
                .with_line_style(LineStyle::Dotted)
                .with_label("IRSA for controller & external-dns"),
        ),
        edge(Edge::new(id("iam_note"), id("external_dns")).with_line_style(LineStyle::Dotted)),
    ];

    Diagram::new(TITLE, RankDirection::TopBottom, Scope::new(elements))
}
