//! Sustainability-report ontology spanning two namespaces.
//!
//! Covers the interesting shapes at once: a relationship with several ranges
//! (`emits`), targets measured in different units, a propertyless class
//! (`Report`) that no relationship touches and a slash namespace next to a hash namespace.

/// Multi-class ESG ontology.
pub const ESG: &str = r#"
@prefix rdf:  <http://www.w3.org/1999/02/22-rdf-syntax-ns#> .
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
@prefix owl:  <http://www.w3.org/2002/07/owl#> .
@prefix xsd:  <http://www.w3.org/2001/XMLSchema#> .
@prefix :     <http://example.org/esg#> .
@prefix env:  <https://example.org/env/> .

:Company a owl:Class .
:Report  a owl:Class .
:Scope1  a owl:Class .
:Scope2  a owl:Class .
env:Waste a owl:Class .
env:Land  a owl:Class .

:LEI a owl:DatatypeProperty ; rdfs:domain :Company ; rdfs:range xsd:string .
:name a owl:DatatypeProperty ; rdfs:domain :Company ; rdfs:range xsd:string .

:label a owl:DatatypeProperty ;
    rdfs:domain :Scope1, :Scope2, env:Waste, env:Land ;
    rdfs:range xsd:string .
:period a owl:DatatypeProperty ;
    rdfs:domain :Scope1, :Scope2, env:Waste, env:Land ;
    rdfs:range xsd:string .
:tonsCO2Eq a owl:DatatypeProperty ;
    rdfs:domain :Scope1, :Scope2 ;
    rdfs:range xsd:decimal .

env:tons a owl:DatatypeProperty ; rdfs:domain env:Waste ; rdfs:range xsd:decimal .
env:hectares a owl:DatatypeProperty ; rdfs:domain env:Land ; rdfs:range xsd:decimal .

:emits a owl:ObjectProperty ;
    rdfs:domain :Company ;
    rdfs:range :Scope1, :Scope2 .

env:produces a owl:ObjectProperty ;
    rdfs:domain :Company ;
    rdfs:range env:Waste .

env:occupies a owl:ObjectProperty ;
    rdfs:domain :Company ;
    rdfs:range env:Land .
"#;
