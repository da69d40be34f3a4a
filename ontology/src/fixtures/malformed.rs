//! Ontologies whose relationships cannot be compiled.

/// `emits` starts at `Subsidiary`, which is never declared as a class.
pub const UNDECLARED_SOURCE: &str = r#"
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
@prefix owl:  <http://www.w3.org/2002/07/owl#> .
@prefix xsd:  <http://www.w3.org/2001/XMLSchema#> .
@prefix :     <http://example.org/esg#> .

:Company a owl:Class .
:Scope1  a owl:Class .
:LEI a owl:DatatypeProperty ; rdfs:domain :Company ; rdfs:range xsd:string .
:label a owl:DatatypeProperty ; rdfs:domain :Scope1 ; rdfs:range xsd:string .
:tonsCO2Eq a owl:DatatypeProperty ; rdfs:domain :Scope1 ; rdfs:range xsd:decimal .

:emits a owl:ObjectProperty ;
    rdfs:domain :Subsidiary ;
    rdfs:range :Scope1 .
"#;

/// `emits` ranges over `Scope9`, which is never declared.
pub const UNDECLARED_TARGET: &str = r#"
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
@prefix owl:  <http://www.w3.org/2002/07/owl#> .
@prefix xsd:  <http://www.w3.org/2001/XMLSchema#> .
@prefix :     <http://example.org/esg#> .

:Company a owl:Class .
:LEI a owl:DatatypeProperty ; rdfs:domain :Company ; rdfs:range xsd:string .

:emits a owl:ObjectProperty ;
    rdfs:domain :Company ;
    rdfs:range :Scope9 .
"#;

/// Two distinct `emits` properties in different namespaces over the same
/// class pair, so both map to `Company_emits_Scope1`.
pub const AMBIGUOUS_RELATION: &str = r#"
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
@prefix owl:  <http://www.w3.org/2002/07/owl#> .
@prefix xsd:  <http://www.w3.org/2001/XMLSchema#> .
@prefix :     <http://example.org/esg#> .
@prefix alt:  <http://example.org/alt#> .

:Company a owl:Class .
:Scope1  a owl:Class .
:LEI a owl:DatatypeProperty ; rdfs:domain :Company ; rdfs:range xsd:string .
:label a owl:DatatypeProperty ; rdfs:domain :Scope1 ; rdfs:range xsd:string .
:tonsCO2Eq a owl:DatatypeProperty ; rdfs:domain :Scope1 ; rdfs:range xsd:decimal .

:emits a owl:ObjectProperty ; rdfs:domain :Company ; rdfs:range :Scope1 .
alt:emits a owl:ObjectProperty ; rdfs:domain :Company ; rdfs:range :Scope1 .
"#;

/// `publishes` targets `Report`, which declares no scalar property and so
/// cannot carry the edge value.
pub const PROPERTYLESS_TARGET: &str = r#"
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
@prefix owl:  <http://www.w3.org/2002/07/owl#> .
@prefix xsd:  <http://www.w3.org/2001/XMLSchema#> .
@prefix :     <http://example.org/esg#> .

:Company a owl:Class .
:Report  a owl:Class .
:LEI a owl:DatatypeProperty ; rdfs:domain :Company ; rdfs:range xsd:string .

:publishes a owl:ObjectProperty ; rdfs:domain :Company ; rdfs:range :Report .
"#;
